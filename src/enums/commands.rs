use std::path::PathBuf;
use clap::Subcommand;

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Analyze one GitHub issue
    Analyze {
        /// GitHub repository URL
        #[clap(short, long)]
        repo: String,
        /// Issue number
        #[clap(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        issue: u64,
        /// Also fetch developer details for the issue
        #[clap(short, long)]
        developer_info: bool,
        /// Print the raw result JSON instead of the formatted card
        #[clap(long)]
        json: bool,
        /// Save the result JSON to a file
        #[clap(short, long)]
        save: Option<PathBuf>,
    },
    /// Show recent analyses
    History {
        /// Number of entries to show
        #[clap(short, long)]
        limit: Option<usize>,
    },
    /// Remove every persisted history entry
    ClearHistory,
    /// Check the configuration and backend reachability
    Validate,
    /// Interactive session keeping results between actions
    Session,
}
