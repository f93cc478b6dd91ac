use std::sync::Arc;
use issue_assistant::enums::analysis_state::AnalysisState;
use issue_assistant::errors::AssistantError;
use issue_assistant::services::file_cache_store::FileCacheStore;
use issue_assistant::structs::analysis_request::AnalysisRequest;
use issue_assistant::structs::cache_entry::CacheEntry;
use issue_assistant::structs::history_view::HistoryView;
use issue_assistant::workers::request_orchestrator::RequestOrchestrator;
use super::support::{analysis, GatedService};

fn orchestrator_at(path: &std::path::Path, service: Arc<GatedService>) -> RequestOrchestrator {
    RequestOrchestrator::new(service, Arc::new(FileCacheStore::new(path)), 5)
}

#[tokio::test]
async fn acme_widgets_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let service = Arc::new(GatedService::new());
    service.answer_analysis(42, Ok(analysis("Fixes crash")));

    let orchestrator = orchestrator_at(&path, service);
    assert_eq!(orchestrator.load_history().await, HistoryView::default());
    assert_eq!(
        orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", 42)).await,
        AnalysisState::Succeeded
    );

    let state = orchestrator.snapshot().await;
    assert_eq!(state.history.recent, vec![CacheEntry::new("https://github.com/acme/widgets", 42)]);
    assert_eq!(state.history.count, 1);
}

#[tokio::test]
async fn history_survives_a_restart_and_is_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let service = Arc::new(GatedService::new());
        for issue in 1..=7 {
            service.answer_analysis(issue, Ok(analysis("ok")));
        }
        let orchestrator = orchestrator_at(&path, service);
        for issue in 1..=7 {
            orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", issue)).await;
        }
    }

    let restarted = orchestrator_at(&path, Arc::new(GatedService::new()));
    let history = restarted.load_history().await;
    assert_eq!(history.count, 7);
    let issues: Vec<u64> = history.recent.iter().map(|e| e.issue_number).collect();
    assert_eq!(issues, vec![7, 6, 5, 4, 3]);

    let state = restarted.snapshot().await;
    assert_eq!(state.analysis_state, AnalysisState::Succeeded);
    let current = state.current.unwrap();
    assert_eq!(current.request, AnalysisRequest::new("https://github.com/acme/widgets", 7));
    assert_eq!(current.result, analysis("ok"));
}

#[tokio::test]
async fn failed_analysis_keeps_the_last_saved_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let service = Arc::new(GatedService::new());
        service.answer_analysis(1, Ok(analysis("first")));
        service.answer_analysis(2, Err(AssistantError::remote_error("analyze_issue", Some(404), "Issue not found")));
        let orchestrator = orchestrator_at(&path, service);
        orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", 1)).await;
        orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", 2)).await;
        orchestrator.clear_history().await;
    }

    let restarted = orchestrator_at(&path, Arc::new(GatedService::new()));
    assert_eq!(restarted.load_history().await.count, 0);
    let current = restarted.snapshot().await.current.unwrap();
    assert_eq!(current.request.issue_number, 1);
    assert_eq!(current.result.summary, "first");
}

#[tokio::test]
async fn clear_then_reload_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let service = Arc::new(GatedService::new());
    service.answer_analysis(1, Ok(analysis("ok")));
    service.answer_analysis(2, Ok(analysis("ok")));

    let orchestrator = orchestrator_at(&path, service);
    orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", 1)).await;
    orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", 2)).await;

    assert!(orchestrator.clear_history().await.is_empty());
    assert_eq!(orchestrator.load_history().await, HistoryView::default());
    assert_eq!(orchestrator.snapshot().await.analysis_state, AnalysisState::Succeeded);

    let restarted = orchestrator_at(&path, Arc::new(GatedService::new()));
    assert_eq!(restarted.load_history().await.count, 0);
}

#[tokio::test]
async fn corrupted_history_file_does_not_block_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{\"oops\": true}").unwrap();

    let service = Arc::new(GatedService::new());
    service.answer_analysis(9, Ok(analysis("ok")));
    let orchestrator = orchestrator_at(&path, service);

    assert_eq!(orchestrator.load_history().await.count, 0);
    orchestrator.start_analysis(AnalysisRequest::new("https://github.com/acme/widgets", 9)).await;
    assert_eq!(orchestrator.load_history().await.count, 1);
}
