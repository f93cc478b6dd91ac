use std::sync::atomic::Ordering;
use std::sync::Arc;
use issue_assistant::enums::analysis_state::AnalysisState;
use issue_assistant::enums::developer_state::DeveloperState;
use issue_assistant::services::file_cache_store::FileCacheStore;
use issue_assistant::services::memory_cache_store::MemoryCacheStore;
use issue_assistant::traits::cache_store::CacheStore;
use issue_assistant::workers::request_orchestrator::RequestOrchestrator;
use issue_assistant::workers::session_runner::SessionRunner;
use super::support::{analysis, developer_info, GatedService};

#[tokio::test]
async fn scripted_session_drives_both_flows() {
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("result.json");

    let service = Arc::new(GatedService::new());
    service.answer_analysis(42, Ok(analysis("Fixes crash")));
    service.answer_developer(42, Ok(developer_info("octocat")));
    let cache = Arc::new(MemoryCacheStore::new());

    let orchestrator = RequestOrchestrator::new(service.clone(), cache.clone(), 5);
    let mut session = SessionRunner::new(orchestrator);

    let script = format!(
        "help\nnonsense\nanalyze https://github.com/acme/widgets 42\ndev\ndev\nsave {}\nhistory\nclear\nquit\nanalyze never reached\n",
        export.display()
    );
    session.run_with(script.as_bytes(), false).await.unwrap();

    let state = session.orchestrator().snapshot().await;
    assert_eq!(state.analysis_state, AnalysisState::Succeeded);
    assert_eq!(state.developer_state, DeveloperState::Hidden);
    assert!(state.history.is_empty());
    assert!(cache.load().is_empty());
    assert_eq!(service.analyze_calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.developer_calls.load(Ordering::SeqCst), 1);

    let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(saved["summary"], "Fixes crash");
    assert_eq!(saved["issue_number"], 42);
}

#[tokio::test]
async fn developer_toggle_without_analysis_is_harmless() {
    let service = Arc::new(GatedService::new());
    let orchestrator = RequestOrchestrator::new(service.clone(), Arc::new(MemoryCacheStore::new()), 5);
    let mut session = SessionRunner::new(orchestrator);

    session.run_with("dev\ncopy\ncopy-dev\n".as_bytes(), false).await.unwrap();

    assert_eq!(service.developer_calls.load(Ordering::SeqCst), 0);
    assert_eq!(session.orchestrator().snapshot().await.developer_state, DeveloperState::Hidden);
}

#[tokio::test]
async fn restarted_session_picks_up_the_last_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let first = Arc::new(GatedService::new());
    first.answer_analysis(42, Ok(analysis("Fixes crash")));
    let mut session = SessionRunner::new(RequestOrchestrator::new(first, Arc::new(FileCacheStore::new(&path)), 5));
    session.run_with("analyze https://github.com/acme/widgets 42\nquit\n".as_bytes(), false).await.unwrap();

    let second = Arc::new(GatedService::new());
    second.answer_developer(42, Ok(developer_info("octocat")));
    let mut restarted = SessionRunner::new(RequestOrchestrator::new(second.clone(), Arc::new(FileCacheStore::new(&path)), 5));
    restarted.run_with("dev\nquit\n".as_bytes(), false).await.unwrap();

    let state = restarted.orchestrator().snapshot().await;
    assert_eq!(state.current.unwrap().result.summary, "Fixes crash");
    assert_eq!(state.developer_state, DeveloperState::Shown);
    assert_eq!(second.analyze_calls.load(Ordering::SeqCst), 0);
    assert_eq!(second.developer_calls.load(Ordering::SeqCst), 1);
}
