/// Loading, creating and validating the config file.
pub mod config_manager;
/// Defaults, endpoint names and user-facing messages.
pub mod constants;
