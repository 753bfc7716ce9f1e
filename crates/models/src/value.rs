use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar the dashboard may submit either as a JSON number or as the raw
/// string from a form input (prices, passenger counts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    /// True for an empty or whitespace-only text value.
    pub fn is_blank(&self) -> bool {
        match self {
            NumberOrText::Number(_) => false,
            NumberOrText::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrText::Number(n) => write!(f, "{}", n),
            NumberOrText::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NumberOrText {
    fn from(value: i64) -> Self {
        NumberOrText::Number(value.into())
    }
}

impl From<&str> for NumberOrText {
    fn from(value: &str) -> Self {
        NumberOrText::Text(value.to_string())
    }
}
