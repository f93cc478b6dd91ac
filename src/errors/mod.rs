use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::config::constants::GENERIC_REMOTE_ERROR_MESSAGE;

/// Every failure the assistant can report.
///
/// The first three variants are the ones the analysis flows surface; the rest
/// come from configuration, storage and the runtime around them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistantError {
    /// Input rejected locally, never reaches the network.
    ValidationError {
        /// Offending input field.
        field: String,
        /// Value as entered.
        value: String,
        /// Rule the value broke.
        constraint: String,
        /// Text shown to the user instead of the technical description.
        suggestion: Option<String>,
    },

    /// Backend answered with a non-success status or an unusable body.
    RemoteError {
        /// Endpoint that failed.
        operation: String,
        /// HTTP status, if one was received.
        status_code: Option<u16>,
        /// Backend-provided detail, shown verbatim.
        message: String,
    },

    /// Backend could not be reached at all.
    ConnectivityError {
        /// Endpoint that was being called.
        operation: String,
        /// Full URL, if known.
        url: Option<String>,
        /// Transport error text.
        reason: String,
    },

    /// Config values that are present but unusable.
    ConfigurationError {
        /// What is wrong.
        message: String,
        /// Config key involved.
        field: Option<String>,
        /// How to fix it.
        suggestion: Option<String>,
    },
    /// Config file that cannot be read.
    ConfigurationFileError {
        /// Config file path.
        path: String,
        /// I/O error text.
        reason: String,
    },

    /// Local file I/O failure.
    FileOperationError {
        /// File involved.
        file_path: String,
        /// What was being done to it.
        operation: String,
        /// I/O error text.
        reason: String,
    },

    /// Malformed JSON or TOML.
    ParseError {
        /// `JSON` or `TOML`.
        content_type: String,
        /// Line of the error, when the parser reports one.
        line_number: Option<usize>,
        /// Parser error text.
        reason: String,
    },

    /// Anything else, such as a panicked background task.
    SystemError {
        /// What was running.
        operation: String,
        /// Error text.
        reason: String,
    },
}

impl AssistantError {
    /// Local input rejection; `suggestion` becomes the displayed message.
    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    /// Non-success backend response.
    pub fn remote_error(operation: &str, status_code: Option<u16>, message: &str) -> Self {
        Self::RemoteError {
            operation: operation.to_string(),
            status_code,
            message: message.to_string(),
        }
    }

    /// Backend unreachable or connection dropped.
    pub fn connectivity_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::ConnectivityError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            reason: reason.to_string(),
        }
    }

    /// Unusable config value.
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    /// Local file I/O failure.
    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Runtime failure outside the flows.
    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether retrying the same action can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ValidationError { .. } => true,
            Self::RemoteError { .. } => true,
            Self::ConnectivityError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::FileOperationError { .. } => false,
            Self::ParseError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    /// How loudly the error is reported.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ConnectivityError { .. } => ErrorSeverity::Medium,
            Self::RemoteError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    /// The bare human-readable message shown in an error slot.
    ///
    /// Remote errors carry the backend's `detail` verbatim.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { suggestion: Some(suggestion), .. } => suggestion.clone(),
            Self::ValidationError { field, constraint, .. } => format!("{} {}", field, constraint),
            Self::RemoteError { message, .. } => message.clone(),
            Self::ConnectivityError { url: Some(url), .. } => {
                format!("Could not connect to backend at {}. Is the analysis service running?", url)
            }
            Self::ConnectivityError { .. } => {
                "Could not connect to backend. Is the analysis service running?".to_string()
            }
            Self::ConfigurationError { message, .. } => message.clone(),
            Self::ConfigurationFileError { path, reason } => format!("{}: {}", path, reason),
            Self::FileOperationError { file_path, operation, reason } => {
                format!("{} failed for '{}': {}", operation, file_path, reason)
            }
            Self::ParseError { content_type, reason, .. } => format!("{} parse error: {}", content_type, reason),
            Self::SystemError { operation, reason } => format!("{}: {}", operation, reason),
        }
    }

    /// Long form for the terminal, with hints.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::RemoteError { operation, status_code, message } => {
                let mut msg = format!("Backend error during {}: {}", operation, message);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::ConnectivityError { operation, reason, .. } => {
                format!("{}\nDuring {}: {}\n💡 Check the backend URL in your configuration and try again", self.message(), operation, reason)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    /// Debug form for logs.
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl StdError for AssistantError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Input problems the user can fix directly.
    Low,
    /// Backend or data problems.
    Medium,
    /// Local storage problems.
    High,
    /// Runtime failures.
    Critical,
}

impl ErrorSeverity {
    /// Marker printed before the message.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    /// Upper-case label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result alias used throughout the crate.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Reports errors that end a command.
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &AssistantError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Best-effort extraction of the backend's error message from a response body.
///
/// A string `detail` is used verbatim; a list of validation entries is joined
/// on their `msg` fields.
pub fn extract_error_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_REMOTE_ERROR_MESSAGE.to_string();
    };

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => detail.clone(),
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                GENERIC_REMOTE_ERROR_MESSAGE.to_string()
            } else {
                messages.join("; ")
            }
        }
        _ => GENERIC_REMOTE_ERROR_MESSAGE.to_string(),
    }
}

impl From<std::io::Error> for AssistantError {
    fn from(error: std::io::Error) -> Self {
        AssistantError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(error: serde_json::Error) -> Self {
        AssistantError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for AssistantError {
    fn from(error: toml::de::Error) -> Self {
        AssistantError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return AssistantError::RemoteError {
                operation: "HTTP request".to_string(),
                status_code: Some(status.as_u16()),
                message: error.to_string(),
            };
        }

        AssistantError::ConnectivityError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}
