use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{API_BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{AssistantError, AssistantResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Issue Assistant Configuration

[backend]
# Base URL of the analysis service exposing /analyze_issue and /developer_info
base_url = "http://localhost:8000"

# Optional per-request timeout in seconds. Leave unset to wait indefinitely.
# request_timeout_secs = 60

[history]
# Where analysis history is persisted (defaults to ~/issue-assistant/history.json)
# cache_file = "/home/user/issue-assistant/history.json"

# Number of recent analyses shown in history views
display_limit = 5
"#;

/// Reads and writes `~/issue-assistant/config.toml`.
pub struct ConfigManager;

impl ConfigManager {

    /// Config file location.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config file, or defaults if absent, then applies the
    /// backend URL environment override.
    pub fn load() -> AssistantResult<Config> {
        let mut config = Self::load_from(&Self::config_path())?;

        if let Ok(base_url) = std::env::var(API_BASE_URL_ENV) {
            let trimmed = base_url.trim();
            if !trimmed.is_empty() {
                log::debug!("🔧 Backend URL overridden by {}", API_BASE_URL_ENV);
                config.backend.base_url = trimmed.to_string();
            }
        }

        Ok(config)
    }

    /// Loads a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> AssistantResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| AssistantError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parses TOML config text.
    pub fn parse(content: &str) -> AssistantResult<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Writes a commented sample config. Fails if one already exists.
    pub fn create_sample_config() -> AssistantResult<PathBuf> {
        let config_file_path = Self::config_path();

        if config_file_path.exists() {
            return Err(AssistantError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Edit {} directly or remove it first", config_file_path.display())),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;

        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    /// Every problem found, or `Ok` if the config is usable.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = config.backend.base_url.trim();
        if base_url.is_empty() {
            errors.push("backend.base_url must not be empty".to_string());
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("backend.base_url must start with http:// or https://, got: {}", base_url));
        }

        if config.backend.request_timeout_secs == Some(0) {
            errors.push("backend.request_timeout_secs must be greater than zero when set".to_string());
        }

        if config.history.display_limit == 0 {
            errors.push("history.display_limit must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
