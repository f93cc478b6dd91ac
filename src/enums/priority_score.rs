use std::fmt;
use serde::{Deserialize, Serialize};

/// Priority as sent by the backend: either a bare number or text such as
/// `"3 - affects build stability."`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriorityScore {
    /// Bare number.
    Number(f64),
    /// Free text, usually starting with a number.
    Text(String),
}

impl PriorityScore {
    /// Numeric value, parsed from the leading digits of text.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => {
                let leading: String = text
                    .trim_start()
                    .chars()
                    .take_while(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                leading.parse().ok()
            }
        }
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.fract() == 0.0 => write!(f, "{}", *value as i64),
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}
