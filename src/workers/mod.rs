/// Runs one CLI subcommand.
pub mod command_runner;
/// Analysis and developer-info flows.
pub mod request_orchestrator;
/// Interactive session loop.
pub mod session_runner;
