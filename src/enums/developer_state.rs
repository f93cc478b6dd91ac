/// Developer-info sub-state, orthogonal to [`AnalysisState`](crate::enums::analysis_state::AnalysisState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeveloperState {
    /// Nothing shown.
    #[default]
    Hidden,
    /// A call is in flight.
    Loading,
    /// `developer_info` holds the details.
    Shown,
    /// `developer_error` holds the reason.
    Failed,
}
