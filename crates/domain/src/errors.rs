//! Error types used throughout the relay

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for PM Relay
///
/// Every variant carries a human-readable message. `Upstream` keeps the
/// underlying transport error text so it can be surfaced to clients as
/// `details`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure or non-2xx response from SAP.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Response body was not well-formed XML.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Well-formed XML that lacks the expected feed/entry/properties nodes.
    #[error("Unexpected structure: {0}")]
    UnexpectedStructure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Stable label suitable for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Upstream(_) => "upstream",
            Self::XmlParse(_) => "xml_parse",
            Self::UnexpectedStructure(_) => "unexpected_structure",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for PM Relay operations
pub type Result<T> = std::result::Result<T, RelayError>;
