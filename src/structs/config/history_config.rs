use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::config::constants::{CONFIG_DIR_NAME, HISTORY_FILE_NAME};
use crate::helpers::config_helper::ConfigHelper;

/// History file location and view size.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Overrides the default history file location.
    #[serde(default)]
    pub cache_file: Option<String>,

    /// Entries shown in history views.
    #[serde(default = "ConfigHelper::default_display_limit")]
    pub display_limit: usize,
}

impl HistoryConfig {
    /// Configured file, or `~/issue-assistant/history.json`.
    pub fn cache_path(&self) -> PathBuf {
        match &self.cache_file {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .map(|d| d.join(CONFIG_DIR_NAME).join(HISTORY_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME)),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            cache_file: None,
            display_limit: ConfigHelper::default_display_limit(),
        }
    }
}
