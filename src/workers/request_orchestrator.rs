use std::sync::Arc;
use serde::Serialize;
use tokio::sync::Mutex;
use crate::enums::analysis_state::AnalysisState;
use crate::enums::developer_state::DeveloperState;
use crate::errors::{AssistantError, AssistantResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analyzed_issue::AnalyzedIssue;
use crate::structs::cache_entry::CacheEntry;
use crate::structs::history_view::HistoryView;
use crate::structs::orchestrator_state::OrchestratorState;
use crate::traits::analysis_service::AnalysisService;
use crate::traits::cache_store::CacheStore;

#[derive(Serialize)]
struct Report<'a> {
    result: Option<&'a AnalyzedIssue>,
    developer_details: Option<&'a serde_json::Value>,
}

/// Drives the analysis and developer-info flows against the backend and keeps
/// the history cache in step with successful analyses.
///
/// Errors never escape as `Err`; they land in the per-flow error slots of
/// [`OrchestratorState`]. Every remote call is tagged with a sequence number and
/// a response is applied only if no newer call of the same flow was issued
/// meanwhile. The state lock is never held across a remote call or a cache
/// write; cache I/O runs on the blocking pool, one operation at a time.
pub struct RequestOrchestrator {
    service: Arc<dyn AnalysisService>,
    cache: Arc<dyn CacheStore>,
    history_limit: usize,
    state: Mutex<OrchestratorState>,
    history_gate: Mutex<()>,
}

impl RequestOrchestrator {
    /// `history_limit` bounds the history view.
    pub fn new(service: Arc<dyn AnalysisService>, cache: Arc<dyn CacheStore>, history_limit: usize) -> Self {
        Self {
            service,
            cache,
            history_limit,
            state: Mutex::new(OrchestratorState::default()),
            history_gate: Mutex::new(()),
        }
    }

    /// Copy of everything currently observable.
    pub async fn snapshot(&self) -> OrchestratorState {
        self.state.lock().await.clone()
    }

    async fn with_cache<T, F>(&self, operation: &str, work: F) -> AssistantResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn CacheStore) -> T + Send + 'static,
    {
        let cache = Arc::clone(&self.cache);
        tokio::task::spawn_blocking(move || work(cache.as_ref()))
            .await
            .map_err(|e| AssistantError::system_error(operation, &e.to_string()))
    }

    /// Validates `request`, queries the backend and, if no newer analysis was
    /// started meanwhile, applies the outcome.
    pub async fn start_analysis(&self, request: AnalysisRequest) -> AnalysisState {
        let seq = {
            let mut state = self.state.lock().await;
            state.analysis_seq += 1;
            state.current = None;
            state.analysis_error = None;
            state.reset_developer();

            if let Err(error) = request.validate() {
                log::warn!("⚠️ Rejected analysis request: {}", error.message());
                state.analysis_state = AnalysisState::Failed;
                state.analysis_error = Some(error);
                return AnalysisState::Failed;
            }

            state.analysis_state = AnalysisState::Analyzing;
            state.analysis_seq
        };

        log::info!("🔍 Analyzing {}", request.label());
        let outcome = self.service.analyze_issue(&request).await;

        let applied = {
            let mut state = self.state.lock().await;
            if state.analysis_seq != seq {
                log::debug!("⏭️ Ignoring stale analysis response for {} (call {}, latest {})", request.label(), seq, state.analysis_seq);
                return state.analysis_state;
            }

            match outcome {
                Ok(result) => {
                    log::info!("✅ Analysis complete for {}", request.label());
                    let issue = AnalyzedIssue::new(request, result);
                    state.reset_developer();
                    state.current = Some(issue.clone());
                    state.analysis_state = AnalysisState::Succeeded;
                    issue
                }
                Err(error) => {
                    log::error!("❌ Analysis failed for {}: {}", request.label(), error.technical_details());
                    state.analysis_error = Some(error);
                    state.analysis_state = AnalysisState::Failed;
                    return AnalysisState::Failed;
                }
            }
        };

        self.record_success(applied).await;
        AnalysisState::Succeeded
    }

    // Appends to history and refreshes the last-result slot. A failure here
    // never turns the analysis into a failure.
    async fn record_success(&self, issue: AnalyzedIssue) {
        let _gate = self.history_gate.lock().await;
        let entry = CacheEntry::from(&issue.request);

        let appended = self
            .with_cache("record analysis", move |cache| {
                if let Err(e) = cache.save_last_result(&issue) {
                    log::warn!("⚠️ Last result could not be saved: {}", e);
                }
                cache.append(entry)
            })
            .await
            .and_then(|appended| appended);

        match appended {
            Ok((entries, _)) => {
                self.state.lock().await.history = HistoryView::from_entries(&entries, self.history_limit);
            }
            Err(e) => log::warn!("⚠️ Analysis succeeded but history could not be saved: {}", e),
        }
    }

    /// Shows or hides developer details for the current result.
    ///
    /// The backend is always queried with the request the current result is
    /// tagged with, even if `request` (the live input) has changed since.
    pub async fn toggle_developer_info(&self, request: &AnalysisRequest) -> DeveloperState {
        let (seq, target) = {
            let mut state = self.state.lock().await;

            match state.developer_state {
                DeveloperState::Shown => {
                    state.reset_developer();
                    return DeveloperState::Hidden;
                }
                DeveloperState::Loading => {
                    log::debug!("⏳ Developer info already loading");
                    return DeveloperState::Loading;
                }
                DeveloperState::Hidden | DeveloperState::Failed => {}
            }

            let tagged = if state.analysis_state == AnalysisState::Succeeded {
                state.current.as_ref().map(|current| current.request.clone())
            } else {
                None
            };

            let Some(tagged) = tagged else {
                log::warn!("⚠️ Developer info requested without a completed analysis");
                state.developer_seq += 1;
                state.developer_info = None;
                state.developer_state = DeveloperState::Failed;
                state.developer_error = Some(AssistantError::validation_error(
                    "analysis",
                    &request.label(),
                    "must complete successfully before developer info is available",
                    Some("Analyze the issue first."),
                ));
                return DeveloperState::Failed;
            };

            if &tagged != request {
                log::debug!("🔀 Using analyzed request {} instead of live input {}", tagged.label(), request.label());
            }

            state.developer_seq += 1;
            state.developer_info = None;
            state.developer_error = None;
            state.developer_state = DeveloperState::Loading;
            (state.developer_seq, tagged)
        };

        log::info!("🧑‍💻 Loading developer info for {}", target.label());
        let outcome = self.service.developer_info(&target).await;

        let mut state = self.state.lock().await;
        if state.developer_seq != seq {
            log::debug!("⏭️ Ignoring stale developer info response for {}", target.label());
            return state.developer_state;
        }

        match outcome {
            Ok(info) => {
                state.developer_info = Some(info);
                state.developer_state = DeveloperState::Shown;
            }
            Err(error) => {
                log::error!("❌ Developer info failed for {}: {}", target.label(), error.technical_details());
                state.developer_info = None;
                state.developer_error = Some(error);
                state.developer_state = DeveloperState::Failed;
            }
        }

        state.developer_state
    }

    /// Reads the persisted history into the view. On a fresh orchestrator the
    /// last saved result is restored as the current one.
    pub async fn load_history(&self) -> HistoryView {
        let _gate = self.history_gate.lock().await;
        let (entries, last_result) = self
            .with_cache("load history", |cache| (cache.load(), cache.load_last_result()))
            .await
            .unwrap_or_else(|e| {
                log::error!("❌ Failed to load history: {}", e.technical_details());
                (Vec::new(), None)
            });

        let mut state = self.state.lock().await;
        state.history = HistoryView::from_entries(&entries, self.history_limit);

        if let Some(issue) = last_result {
            if state.analysis_state == AnalysisState::Idle && state.current.is_none() {
                log::info!("♻️ Restored last result for {}", issue.request.label());
                state.current = Some(issue);
                state.analysis_state = AnalysisState::Succeeded;
            }
        }

        state.history.clone()
    }

    /// Empties the persisted history. The current result and developer info
    /// are left untouched.
    pub async fn clear_history(&self) -> HistoryView {
        let _gate = self.history_gate.lock().await;
        let entries = self
            .with_cache("clear history", |cache| {
                if let Err(e) = cache.clear() {
                    log::error!("❌ Failed to clear history: {}", e.technical_details());
                }
                // Reflect what storage actually holds, even if the clear failed
                cache.load()
            })
            .await
            .unwrap_or_else(|e| {
                log::error!("❌ Failed to clear history: {}", e.technical_details());
                Vec::new()
            });

        let mut state = self.state.lock().await;
        state.history = HistoryView::from_entries(&entries, self.history_limit);
        state.history.clone()
    }

    /// Pretty JSON of the current tagged result, if any.
    pub async fn export_result(&self) -> AssistantResult<Option<String>> {
        let state = self.state.lock().await;
        state
            .current
            .as_ref()
            .map(|current| serde_json::to_string_pretty(current).map_err(AssistantError::from))
            .transpose()
    }

    /// Pretty JSON of the developer `detailed_json` blob, if shown.
    pub async fn export_developer_details(&self) -> AssistantResult<Option<String>> {
        let state = self.state.lock().await;
        state
            .developer_info
            .as_ref()
            .map(|info| serde_json::to_string_pretty(&info.detailed_json).map_err(AssistantError::from))
            .transpose()
    }

    /// Current result and developer details as a single JSON document.
    /// Absent parts are `null`.
    pub async fn export_report(&self) -> AssistantResult<String> {
        let state = self.state.lock().await;
        let report = Report {
            result: state.current.as_ref(),
            developer_details: state.developer_info.as_ref().map(|info| &info.detailed_json),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
