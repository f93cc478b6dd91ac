use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Where the analysis backend lives and how long to wait for it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without an endpoint path.
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            request_timeout_secs: None,
        }
    }
}
