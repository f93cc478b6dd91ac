use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_state::AnalysisState;
use crate::enums::commands::Commands;
use crate::enums::developer_state::DeveloperState;
use crate::errors::{AssistantError, AssistantResult};
use crate::helpers::export_helper::ExportHelper;
use crate::logger::analysis_printer::AnalysisPrinter;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::file_cache_store::FileCacheStore;
use crate::services::http_analysis_service::HttpAnalysisService;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::workers::request_orchestrator::RequestOrchestrator;
use crate::workers::session_runner::SessionRunner;

/// Runs a single CLI subcommand end to end.
pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    /// Runner with no command started yet.
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Dispatches `command` and logs how long it took.
    pub async fn run_command(&mut self, command: Commands) -> AssistantResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Analyze { repo, issue, developer_info, json, save } => {
                self.analyze_command(repo, issue, developer_info, json, save).await
            }
            Commands::History { limit } => self.history_command(limit).await,
            Commands::ClearHistory => self.clear_history_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Session => self.session_command().await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config() -> AssistantResult<Config> {
        let config = ConfigManager::load()?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            return Err(AssistantError::config_error(
                &errors.join("; "),
                None,
                Some("Run 'issue-assistant validate' for details"),
            ));
        }
        Ok(config)
    }

    fn build_orchestrator(config: &Config, history_limit: usize) -> AssistantResult<RequestOrchestrator> {
        let service = HttpAnalysisService::new(&config.backend)?;
        let cache = FileCacheStore::new(config.history.cache_path());
        log::debug!("📂 History file: {}", cache.path().display());

        Ok(RequestOrchestrator::new(Arc::new(service), Arc::new(cache), history_limit))
    }

    async fn init_command(&self) -> AssistantResult<()> {
        log::info!("🚀 Initializing issue-assistant configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to point at your analysis backend.", path.display());
        log::info!("🔧 Run 'issue-assistant validate' to check your configuration.");

        Ok(())
    }

    async fn analyze_command(&self, repo: String, issue: u64, developer_info: bool, json: bool, save: Option<PathBuf>) -> AssistantResult<()> {
        let config = Self::load_config()?;
        let orchestrator = Self::build_orchestrator(&config, config.history.display_limit)?;
        orchestrator.load_history().await;

        let request = AnalysisRequest::new(repo.trim(), issue);
        let analysis = orchestrator.start_analysis(request.clone());
        let outcome = AnimatedLogger::while_pending("🔍 Analyzing...", analysis).await;

        if outcome != AnalysisState::Succeeded {
            let state = orchestrator.snapshot().await;
            return Err(state
                .analysis_error
                .unwrap_or_else(|| AssistantError::system_error("analyze", "analysis did not complete")));
        }

        if developer_info {
            let toggle = orchestrator.toggle_developer_info(&request);
            if AnimatedLogger::while_pending("🧑‍💻 Loading developer info...", toggle).await != DeveloperState::Shown {
                log::warn!("⚠️ Developer info unavailable, showing analysis only");
            }
        }

        if json {
            println!("{}", orchestrator.export_report().await?);
        } else {
            let state = orchestrator.snapshot().await;
            AnalysisPrinter::print_state(&state);
            AnalysisPrinter::print_history(&state.history);
        }

        if let Some(path) = save {
            if let Some(result) = orchestrator.export_result().await? {
                ExportHelper::save_to_file(&path, &result)?;
            }
        }

        Ok(())
    }

    async fn history_command(&self, limit: Option<usize>) -> AssistantResult<()> {
        let config = Self::load_config()?;
        let orchestrator = Self::build_orchestrator(&config, limit.unwrap_or(config.history.display_limit))?;

        let history = orchestrator.load_history().await;
        AnalysisPrinter::print_history(&history);
        Ok(())
    }

    async fn clear_history_command(&self) -> AssistantResult<()> {
        let config = Self::load_config()?;
        let orchestrator = Self::build_orchestrator(&config, config.history.display_limit)?;

        let history = orchestrator.clear_history().await;
        if !history.is_empty() {
            return Err(AssistantError::file_error(
                &config.history.cache_path().display().to_string(),
                "clear history",
                "entries remain after clearing",
            ));
        }

        log::info!("✅ History cleared");
        Ok(())
    }

    async fn validate_command(&self) -> AssistantResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = ConfigManager::load()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(AssistantError::config_error(
                &format!("{} configuration problem(s) found", errors.len()),
                None,
                Some(&format!("Edit {}", ConfigManager::config_path().display())),
            ));
        }
        log::info!("✅ Configuration is valid");

        let service = HttpAnalysisService::new(&config.backend)?;
        AnimatedLogger::while_pending("📡 Contacting backend...", service.health_check()).await?;
        log::info!("✅ Backend reachable at {}", service.base_url());

        Ok(())
    }

    async fn session_command(&self) -> AssistantResult<()> {
        let config = Self::load_config()?;
        let orchestrator = Self::build_orchestrator(&config, config.history.display_limit)?;

        SessionRunner::new(orchestrator).run().await
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
