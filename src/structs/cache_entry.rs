use serde::{Deserialize, Serialize};
use crate::structs::analysis_request::AnalysisRequest;

/// Record that one analysis was performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Repository URL as it was analyzed.
    pub repo: String,
    /// Issue number as it was analyzed.
    pub issue_number: u64,
}

impl CacheEntry {
    /// Builds an entry.
    pub fn new(repo: impl Into<String>, issue_number: u64) -> Self {
        Self {
            repo: repo.into(),
            issue_number,
        }
    }
}

impl From<&AnalysisRequest> for CacheEntry {
    fn from(request: &AnalysisRequest) -> Self {
        Self::new(request.repository_url.clone(), request.issue_number)
    }
}
