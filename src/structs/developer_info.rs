use serde::{Deserialize, Serialize};

/// Issue metadata as GitHub reports it. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperMetadata {
    /// `open` or `closed`.
    #[serde(default)]
    pub state: Option<String>,
    /// Login of the issue author.
    #[serde(default)]
    pub author: Option<String>,
    /// Comment count.
    #[serde(default)]
    pub comments: Option<u64>,
    /// ISO-8601 creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO-8601 last update time.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Label names.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Issue page.
    #[serde(default)]
    pub html_url: Option<String>,
    /// Repository page.
    #[serde(default)]
    pub repo_html_url: Option<String>,
}

impl DeveloperMetadata {
    /// Issue list URL derived from the repository URL.
    pub fn repo_issues_url(&self) -> Option<String> {
        self.repo_html_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| format!("{}/issues", url.trim_end_matches('/')))
    }
}

/// Payload returned by the `developer_info` endpoint. Transient only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperInfo {
    /// Summary fields.
    #[serde(default)]
    pub metadata: DeveloperMetadata,
    /// Backend relevance order, not chronological.
    #[serde(default)]
    pub top_comments: Vec<String>,
    /// Raw issue JSON, exported as-is.
    #[serde(default)]
    pub detailed_json: serde_json::Value,
}
