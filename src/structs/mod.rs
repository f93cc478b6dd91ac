/// What to analyze.
pub mod analysis_request;
/// What the backend said about an issue.
pub mod analysis_result;
/// A result tagged with its request.
pub mod analyzed_issue;
/// One persisted history record.
pub mod cache_entry;
/// Command-line arguments.
pub mod cli;
/// Config file sections.
pub mod config;
/// Raw issue metadata for developers.
pub mod developer_info;
/// Bounded view over the history.
pub mod history_view;
/// Observable orchestrator state.
pub mod orchestrator_state;
