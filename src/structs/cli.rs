use clap::Parser;
use crate::enums::commands::Commands;

/// Command-line arguments.
#[derive(Parser)]
#[clap(name = "issue-assistant")]
#[clap(about = "AI-powered GitHub issue assistant", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[clap(subcommand)]
    pub command: Commands,
}
