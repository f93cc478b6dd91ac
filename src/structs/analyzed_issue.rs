use serde::Serialize;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;

/// An analysis result tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedIssue {
    /// Request that produced `result`.
    #[serde(flatten)]
    pub request: AnalysisRequest,
    /// Backend payload.
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl AnalyzedIssue {
    /// Tags `result` with `request`.
    pub fn new(request: AnalysisRequest, result: AnalysisResult) -> Self {
        Self { request, result }
    }
}
