/// Analysis flow states.
pub mod analysis_state;
/// CLI subcommands.
pub mod commands;
/// Developer-info flow states.
pub mod developer_state;
/// Numeric or textual priority.
pub mod priority_score;
/// Interactive session commands.
pub mod session_command;
