use clap::Parser;
use issue_assistant::errors::ErrorHandler;
use issue_assistant::structs::cli::Cli;
use issue_assistant::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;

    if let Err(error) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}
