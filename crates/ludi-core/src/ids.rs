//! Content identifiers.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the content API.
///
/// Older records carry a numeric `id`; newer ones may only expose a string
/// `documentId`. The value is passed through untouched and only ever compared
/// for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ContentId {
    Numeric(u64),
    Document(String),
}

impl ContentId {
    /// Build an id from a raw JSON value (number or non-empty string).
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_u64().map(Self::Numeric),
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(Self::Document(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Document(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ContentId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| Self::Document(value.to_string()))
    }
}

impl FromStr for ContentId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map_or_else(|_| Self::Document(s.to_string()), Self::Numeric))
    }
}
