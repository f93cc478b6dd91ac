use serde::{Deserialize, Serialize};
use crate::structs::config::backend_config::BackendConfig;
use crate::structs::config::history_config::HistoryConfig;

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `[backend]`
    #[serde(default)]
    pub backend: BackendConfig,

    /// `[history]`
    #[serde(default)]
    pub history: HistoryConfig,
}
