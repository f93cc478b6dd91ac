use std::sync::Arc;
use issue_assistant::enums::analysis_state::AnalysisState;
use issue_assistant::enums::developer_state::DeveloperState;
use issue_assistant::errors::AssistantError;
use issue_assistant::services::memory_cache_store::MemoryCacheStore;
use issue_assistant::structs::analysis_request::AnalysisRequest;
use issue_assistant::structs::cache_entry::CacheEntry;
use issue_assistant::traits::cache_store::CacheStore;
use issue_assistant::workers::request_orchestrator::RequestOrchestrator;
use super::support::{analysis, developer_info, wait_for_calls, GatedService};

fn repo1() -> AnalysisRequest {
    AnalysisRequest::new("https://github.com/acme/repo1", 1)
}

fn repo2() -> AnalysisRequest {
    AnalysisRequest::new("https://github.com/acme/repo2", 2)
}

fn setup() -> (Arc<GatedService>, Arc<MemoryCacheStore>, Arc<RequestOrchestrator>) {
    let service = Arc::new(GatedService::new());
    let cache = Arc::new(MemoryCacheStore::new());
    let orchestrator = Arc::new(RequestOrchestrator::new(service.clone(), cache.clone(), 5));
    (service, cache, orchestrator)
}

#[tokio::test]
async fn later_request_wins_when_earlier_response_arrives_last() {
    let (service, cache, orchestrator) = setup();
    let first = service.gate_analysis(1);
    let second = service.gate_analysis(2);

    let a = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.start_analysis(repo1()).await }
    });
    wait_for_calls(&service.analyze_calls, 1).await;

    let b = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.start_analysis(repo2()).await }
    });
    wait_for_calls(&service.analyze_calls, 2).await;

    second.send(Ok(analysis("B"))).unwrap();
    assert_eq!(b.await.unwrap(), AnalysisState::Succeeded);

    first.send(Ok(analysis("A"))).unwrap();
    a.await.unwrap();

    let state = orchestrator.snapshot().await;
    assert_eq!(state.analysis_state, AnalysisState::Succeeded);
    let current = state.current.unwrap();
    assert_eq!(current.request, repo2());
    assert_eq!(current.result.summary, "B");
    assert_eq!(cache.load(), vec![CacheEntry::new("https://github.com/acme/repo2", 2)]);
    assert_eq!(state.history.count, 1);
}

#[tokio::test]
async fn stale_failure_does_not_overwrite_later_success() {
    let (service, _cache, orchestrator) = setup();
    let first = service.gate_analysis(1);
    service.answer_analysis(2, Ok(analysis("B")));

    let a = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.start_analysis(repo1()).await }
    });
    wait_for_calls(&service.analyze_calls, 1).await;

    assert_eq!(orchestrator.start_analysis(repo2()).await, AnalysisState::Succeeded);

    first
        .send(Err(AssistantError::remote_error("analyze_issue", Some(400), "Issue not found")))
        .unwrap();
    a.await.unwrap();

    let state = orchestrator.snapshot().await;
    assert_eq!(state.analysis_state, AnalysisState::Succeeded);
    assert!(state.analysis_error.is_none());
    assert_eq!(state.current.unwrap().request, repo2());
}

#[tokio::test]
async fn pending_call_stays_visible_as_analyzing() {
    let (service, cache, orchestrator) = setup();
    let _held = service.gate_analysis(1);

    let task = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.start_analysis(repo1()).await }
    });
    wait_for_calls(&service.analyze_calls, 1).await;

    let state = orchestrator.snapshot().await;
    assert_eq!(state.analysis_state, AnalysisState::Analyzing);
    assert!(state.current.is_none());
    assert!(cache.load().is_empty());

    task.abort();
}

#[tokio::test]
async fn validation_failure_supersedes_an_in_flight_call() {
    let (service, cache, orchestrator) = setup();
    let first = service.gate_analysis(1);

    let a = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.start_analysis(repo1()).await }
    });
    wait_for_calls(&service.analyze_calls, 1).await;

    assert_eq!(orchestrator.start_analysis(AnalysisRequest::new(" ", 5)).await, AnalysisState::Failed);
    first.send(Ok(analysis("A"))).unwrap();
    a.await.unwrap();

    let state = orchestrator.snapshot().await;
    assert_eq!(state.analysis_state, AnalysisState::Failed);
    assert!(matches!(state.analysis_error, Some(AssistantError::ValidationError { .. })));
    assert!(cache.load().is_empty());
    assert_eq!(service.analyze_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn developer_response_for_a_superseded_analysis_is_discarded() {
    let (service, _cache, orchestrator) = setup();
    service.answer_analysis(1, Ok(analysis("A")));
    service.answer_analysis(2, Ok(analysis("B")));
    let developer = service.gate_developer(1);

    assert_eq!(orchestrator.start_analysis(repo1()).await, AnalysisState::Succeeded);

    let toggle = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.toggle_developer_info(&repo1()).await }
    });
    wait_for_calls(&service.developer_calls, 1).await;
    assert_eq!(orchestrator.snapshot().await.developer_state, DeveloperState::Loading);

    assert_eq!(orchestrator.start_analysis(repo2()).await, AnalysisState::Succeeded);
    developer.send(Ok(developer_info("octocat"))).unwrap();
    toggle.await.unwrap();

    let state = orchestrator.snapshot().await;
    assert_eq!(state.developer_state, DeveloperState::Hidden);
    assert!(state.developer_info.is_none());
    assert_eq!(state.current.unwrap().request, repo2());
}

#[tokio::test]
async fn toggle_while_loading_does_not_issue_a_second_call() {
    let (service, _cache, orchestrator) = setup();
    service.answer_analysis(1, Ok(analysis("A")));
    let developer = service.gate_developer(1);

    orchestrator.start_analysis(repo1()).await;
    let toggle = tokio::spawn({
        let orchestrator = Arc::clone(&orchestrator);
        async move { orchestrator.toggle_developer_info(&repo1()).await }
    });
    wait_for_calls(&service.developer_calls, 1).await;

    assert_eq!(orchestrator.toggle_developer_info(&repo1()).await, DeveloperState::Loading);

    developer.send(Ok(developer_info("octocat"))).unwrap();
    assert_eq!(toggle.await.unwrap(), DeveloperState::Shown);
    assert_eq!(service.developer_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}
