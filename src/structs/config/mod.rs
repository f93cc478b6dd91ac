/// Top-level config file.
pub mod config;
/// `[backend]` section.
pub mod backend_config;
/// `[history]` section.
pub mod history_config;
