use crate::config::constants::{DEFAULT_API_BASE_URL, DEFAULT_HISTORY_DISPLAY_LIMIT};

/// Default values referenced from `#[serde(default = ...)]`.
pub struct ConfigHelper;

impl ConfigHelper {
    /// Local development backend.
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    /// Number of history entries shown by default.
    pub fn default_display_limit() -> usize {
        DEFAULT_HISTORY_DISPLAY_LIMIT
    }
}
