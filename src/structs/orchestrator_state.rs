use crate::enums::analysis_state::AnalysisState;
use crate::enums::developer_state::DeveloperState;
use crate::errors::AssistantError;
use crate::structs::analyzed_issue::AnalyzedIssue;
use crate::structs::developer_info::DeveloperInfo;
use crate::structs::history_view::HistoryView;

/// Everything a caller can observe about the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorState {
    /// Analysis flow state.
    pub analysis_state: AnalysisState,
    /// Last applied result, tagged with its request.
    pub current: Option<AnalyzedIssue>,
    /// Set only while `analysis_state` is `Failed`.
    pub analysis_error: Option<AssistantError>,

    /// Developer-info flow state.
    pub developer_state: DeveloperState,
    /// Set only while `developer_state` is `Shown`.
    pub developer_info: Option<DeveloperInfo>,
    /// Set only while `developer_state` is `Failed`.
    pub developer_error: Option<AssistantError>,

    /// History view, refreshed after every cache operation.
    pub history: HistoryView,

    pub(crate) analysis_seq: u64,
    pub(crate) developer_seq: u64,
}

impl OrchestratorState {
    pub(crate) fn reset_developer(&mut self) {
        self.developer_seq += 1;
        self.developer_state = DeveloperState::Hidden;
        self.developer_info = None;
        self.developer_error = None;
    }
}
