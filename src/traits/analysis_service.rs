use async_trait::async_trait;
use crate::errors::AssistantResult;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::developer_info::DeveloperInfo;

/// The remote analysis backend.
///
/// Implementations report non-success responses as `RemoteError` and
/// unreachable backends as `ConnectivityError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {

    /// Analysis of the issue named by `request`.
    async fn analyze_issue(&self, request: &AnalysisRequest) -> AssistantResult<AnalysisResult>;

    /// Metadata, top comments and raw JSON for the issue.
    async fn developer_info(&self, request: &AnalysisRequest) -> AssistantResult<DeveloperInfo>;
}
