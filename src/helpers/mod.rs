/// Serde default values for the config file.
pub mod config_helper;
/// Writing exported JSON to disk.
pub mod export_helper;
