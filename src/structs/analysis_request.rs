use serde::{Deserialize, Serialize};
use crate::config::constants::EMPTY_REPOSITORY_MESSAGE;
use crate::errors::{AssistantError, AssistantResult};

/// One unit of analysis work. Two requests are the same request when both
/// fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// GitHub repository URL as entered; `repo_url` on the wire.
    #[serde(rename = "repo_url")]
    pub repository_url: String,
    /// Issue number, at least 1 when entered through the CLI.
    pub issue_number: u64,
}

impl AnalysisRequest {
    /// Builds a request without validating it.
    pub fn new(repository_url: impl Into<String>, issue_number: u64) -> Self {
        Self {
            repository_url: repository_url.into(),
            issue_number,
        }
    }

    /// Rejects a blank repository URL with a `ValidationError`.
    pub fn validate(&self) -> AssistantResult<()> {
        if self.repository_url.trim().is_empty() {
            return Err(AssistantError::validation_error(
                "repository_url",
                &self.repository_url,
                "must not be empty",
                Some(EMPTY_REPOSITORY_MESSAGE),
            ));
        }
        Ok(())
    }

    /// `<repo> #<issue>`, for logs and headings.
    pub fn label(&self) -> String {
        format!("{} #{}", self.repository_url, self.issue_number)
    }
}
