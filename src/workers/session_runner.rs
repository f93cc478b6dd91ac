use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use crate::enums::analysis_state::AnalysisState;
use crate::enums::session_command::{SessionCommand, SessionCommandError};
use crate::errors::{AssistantResult, ErrorHandler};
use crate::helpers::export_helper::ExportHelper;
use crate::logger::analysis_printer::AnalysisPrinter;
use crate::logger::animated_logger::AnimatedLogger;
use crate::structs::analysis_request::AnalysisRequest;
use crate::workers::request_orchestrator::RequestOrchestrator;

const HELP: &str = "\
Commands:
  analyze <repo-url> <issue>  Analyze an issue (alias: a)
  dev                         Show or hide developer info for the current result (alias: d)
  history                     Show recent analyses (alias: h)
  clear                       Clear the analysis history
  copy                        Print the current result as JSON
  copy-dev                    Print the developer details as JSON
  save <path>                 Save the current result as JSON
  help                        Show this help
  quit                        Leave the session";

/// Interactive loop keeping one orchestrator alive across many actions.
pub struct SessionRunner {
    orchestrator: RequestOrchestrator,
    live_input: Option<AnalysisRequest>,
}

impl SessionRunner {
    /// Session over `orchestrator` with no input yet.
    pub fn new(orchestrator: RequestOrchestrator) -> Self {
        Self {
            orchestrator,
            live_input: None,
        }
    }

    /// Orchestrator driving this session.
    pub fn orchestrator(&self) -> &RequestOrchestrator {
        &self.orchestrator
    }

    /// Runs the session on stdin with a prompt.
    pub async fn run(&mut self) -> AssistantResult<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        self.run_with(stdin, true).await
    }

    /// Runs the session over `reader`, printing a prompt before each line
    /// when `prompt` is set. Ends on `quit` or end of input.
    pub async fn run_with<R: AsyncBufRead + Unpin>(&mut self, reader: R, prompt: bool) -> AssistantResult<()> {
        println!("🌱 AI-Powered GitHub Issue Assistant");
        println!("{}\n", HELP);

        let history = self.orchestrator.load_history().await;
        let restored = self.orchestrator.snapshot().await;
        if let Some(current) = &restored.current {
            println!("♻️ Last result ({})", current.request.label());
            AnalysisPrinter::print_state(&restored);
            self.live_input = Some(current.request.clone());
        }
        AnalysisPrinter::print_history(&history);

        let mut lines = reader.lines();
        loop {
            if prompt {
                print!("\n> ");
                std::io::stdout().flush()?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match line.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => {
                    if let Err(e) = self.handle(command).await {
                        ErrorHandler::handle_error(&e);
                    }
                }
                Err(SessionCommandError::Empty) => {}
                Err(e) => println!("⚠️ {}", e),
            }
        }

        log::info!("👋 Session finished");
        Ok(())
    }

    async fn handle(&mut self, command: SessionCommand) -> AssistantResult<()> {
        match command {
            SessionCommand::Analyze { repo, issue } => {
                let request = AnalysisRequest::new(repo, issue);
                self.live_input = Some(request.clone());

                let analysis = self.orchestrator.start_analysis(request);
                let outcome = AnimatedLogger::while_pending("🔍 Analyzing...", analysis).await;

                let state = self.orchestrator.snapshot().await;
                AnalysisPrinter::print_state(&state);
                if outcome == AnalysisState::Succeeded {
                    AnalysisPrinter::print_history(&state.history);
                }
            }
            SessionCommand::ToggleDeveloperInfo => {
                let Some(live_input) = self.live_input.clone() else {
                    println!("💡 Analyze an issue first.");
                    return Ok(());
                };

                let toggle = self.orchestrator.toggle_developer_info(&live_input);
                AnimatedLogger::while_pending("🧑‍💻 Loading developer info...", toggle).await;
                AnalysisPrinter::print_state(&self.orchestrator.snapshot().await);
            }
            SessionCommand::History => {
                AnalysisPrinter::print_history(&self.orchestrator.snapshot().await.history);
            }
            SessionCommand::ClearHistory => {
                let history = self.orchestrator.clear_history().await;
                AnalysisPrinter::print_history(&history);
            }
            SessionCommand::CopyResult => match self.orchestrator.export_result().await? {
                Some(json) => println!("{}", json),
                None => println!("💡 No result to copy yet."),
            },
            SessionCommand::CopyDeveloperDetails => match self.orchestrator.export_developer_details().await? {
                Some(json) => println!("{}", json),
                None => println!("💡 Open developer info first."),
            },
            SessionCommand::Save(path) => self.save(&path).await?,
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => {}
        }

        Ok(())
    }

    async fn save(&self, path: &Path) -> AssistantResult<()> {
        match self.orchestrator.export_result().await? {
            Some(json) => ExportHelper::save_to_file(path, &json),
            None => {
                println!("💡 No result to save yet.");
                Ok(())
            }
        }
    }
}
