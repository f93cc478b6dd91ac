use std::time::Duration;

/// Backend used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Environment variable overriding `backend.base_url`.
pub const API_BASE_URL_ENV: &str = "ISSUE_ASSISTANT_API_URL";

/// `POST` endpoint returning an analysis.
pub const ANALYZE_ISSUE_ENDPOINT: &str = "analyze_issue";
/// `POST` endpoint returning developer details.
pub const DEVELOPER_INFO_ENDPOINT: &str = "developer_info";
/// `GET` liveness endpoint.
pub const HEALTH_ENDPOINT: &str = "health";

/// Directory under the home directory holding config and history.
pub const CONFIG_DIR_NAME: &str = "issue-assistant";
/// Config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Default history file inside [`CONFIG_DIR_NAME`].
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Entries shown in history views unless configured.
pub const DEFAULT_HISTORY_DISPLAY_LIMIT: usize = 5;

/// Shown when a failed response carries no usable `detail`.
pub const GENERIC_REMOTE_ERROR_MESSAGE: &str = "Something went wrong.";
/// Shown when the repository field is blank.
pub const EMPTY_REPOSITORY_MESSAGE: &str = "Please enter a valid GitHub repository URL.";

/// Spinner redraw period.
pub const SPINNER_FRAME_INTERVAL_MS: u64 = 150;

/// Request timeout from configured seconds.
pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
