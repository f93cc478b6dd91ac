use serde::{Deserialize, Serialize};
use crate::enums::priority_score::PriorityScore;

/// Payload returned by the `analyze_issue` endpoint.
///
/// Fields beyond the known ones are kept so exports match what the backend sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One-paragraph summary of the issue.
    pub summary: String,
    /// `type` on the wire, e.g. `bug`.
    #[serde(rename = "type")]
    pub issue_type: String,
    /// Number or `"<n> - <reason>"` text.
    pub priority_score: PriorityScore,
    /// Empty when the backend sends none.
    #[serde(default)]
    pub suggested_labels: Vec<String>,
    /// Free-text impact assessment.
    pub potential_impact: String,
    /// Unrecognized fields, kept for export.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
