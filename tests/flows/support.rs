use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::oneshot;
use issue_assistant::errors::{AssistantError, AssistantResult};
use issue_assistant::structs::analysis_request::AnalysisRequest;
use issue_assistant::structs::analysis_result::AnalysisResult;
use issue_assistant::structs::developer_info::DeveloperInfo;
use issue_assistant::traits::analysis_service::AnalysisService;

type Gate<T> = oneshot::Receiver<AssistantResult<T>>;

/// Backend whose responses are released by the test, keyed by issue number.
#[derive(Default)]
pub struct GatedService {
    analyze_gates: Mutex<HashMap<u64, Gate<AnalysisResult>>>,
    developer_gates: Mutex<HashMap<u64, Gate<DeveloperInfo>>>,
    pub analyze_calls: AtomicUsize,
    pub developer_calls: AtomicUsize,
}

impl GatedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate_analysis(&self, issue: u64) -> oneshot::Sender<AssistantResult<AnalysisResult>> {
        let (tx, rx) = oneshot::channel();
        self.analyze_gates.lock().unwrap().insert(issue, rx);
        tx
    }

    pub fn gate_developer(&self, issue: u64) -> oneshot::Sender<AssistantResult<DeveloperInfo>> {
        let (tx, rx) = oneshot::channel();
        self.developer_gates.lock().unwrap().insert(issue, rx);
        tx
    }

    /// Registers an analysis response that is available immediately.
    pub fn answer_analysis(&self, issue: u64, response: AssistantResult<AnalysisResult>) {
        let _ = self.gate_analysis(issue).send(response);
    }

    pub fn answer_developer(&self, issue: u64, response: AssistantResult<DeveloperInfo>) {
        let _ = self.gate_developer(issue).send(response);
    }
}

async fn await_gate<T>(gate: Option<Gate<T>>, operation: &str) -> AssistantResult<T> {
    match gate {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(AssistantError::connectivity_error(operation, None, "gate dropped"))),
        None => Err(AssistantError::remote_error(operation, Some(404), "no response scripted")),
    }
}

#[async_trait]
impl AnalysisService for GatedService {
    async fn analyze_issue(&self, request: &AnalysisRequest) -> AssistantResult<AnalysisResult> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.analyze_gates.lock().unwrap().remove(&request.issue_number);
        await_gate(gate, "analyze_issue").await
    }

    async fn developer_info(&self, request: &AnalysisRequest) -> AssistantResult<DeveloperInfo> {
        self.developer_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.developer_gates.lock().unwrap().remove(&request.issue_number);
        await_gate(gate, "developer_info").await
    }
}

pub async fn wait_for_calls(counter: &AtomicUsize, expected: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while counter.load(Ordering::SeqCst) < expected {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("backend was not called in time");
}

pub fn analysis(summary: &str) -> AnalysisResult {
    serde_json::from_value(serde_json::json!({
        "summary": summary,
        "type": "bug",
        "priority_score": 8,
        "suggested_labels": ["bug", "p1"],
        "potential_impact": "high"
    }))
    .unwrap()
}

pub fn developer_info(author: &str) -> DeveloperInfo {
    serde_json::from_value(serde_json::json!({
        "metadata": {"state": "open", "author": author, "comments": 2, "labels": ["bug"]},
        "top_comments": ["Reproduced with the latest release build."],
        "detailed_json": {"author": author}
    }))
    .unwrap()
}
