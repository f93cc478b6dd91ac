/// Analysis flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A call is in flight.
    Analyzing,
    /// `current` holds a result.
    Succeeded,
    /// `analysis_error` holds the reason.
    Failed,
}
