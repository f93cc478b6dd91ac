use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `analyze <repo-url> <issue>`
    Analyze {
        /// Repository URL
        repo: String,
        /// Issue number, at least 1
        issue: u64,
    },
    /// `dev`
    ToggleDeveloperInfo,
    /// `history`
    History,
    /// `clear`
    ClearHistory,
    /// `copy`
    CopyResult,
    /// `copy-dev`
    CopyDeveloperDetails,
    /// `save <path>`
    Save(PathBuf),
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Why a session line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionCommandError {
    /// Blank line.
    #[error("empty input")]
    Empty,
    /// Unrecognized command word.
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    Unknown(String),
    /// Known command with the wrong arguments.
    #[error("usage: {0}")]
    Usage(&'static str),
    /// Issue argument that is not a positive integer.
    #[error("issue number must be a positive integer, got '{0}'")]
    InvalidIssueNumber(String),
}

impl FromStr for SessionCommand {
    type Err = SessionCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(SessionCommandError::Empty)?;
        let args: Vec<&str> = parts.collect();

        match (command.to_lowercase().as_str(), args.as_slice()) {
            ("analyze" | "a", [repo, issue]) => {
                let issue = issue
                    .trim_start_matches('#')
                    .parse::<u64>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| SessionCommandError::InvalidIssueNumber(issue.to_string()))?;
                Ok(Self::Analyze { repo: repo.to_string(), issue })
            }
            ("analyze" | "a", _) => Err(SessionCommandError::Usage("analyze <repo-url> <issue-number>")),
            ("dev" | "d", []) => Ok(Self::ToggleDeveloperInfo),
            ("history" | "h", []) => Ok(Self::History),
            ("clear", []) => Ok(Self::ClearHistory),
            ("copy", []) => Ok(Self::CopyResult),
            ("copy-dev", []) => Ok(Self::CopyDeveloperDetails),
            ("save", [path]) => Ok(Self::Save(PathBuf::from(path))),
            ("save", _) => Err(SessionCommandError::Usage("save <path>")),
            ("help" | "?", []) => Ok(Self::Help),
            ("quit" | "exit" | "q", []) => Ok(Self::Quit),
            (other, _) => Err(SessionCommandError::Unknown(other.to_string())),
        }
    }
}
