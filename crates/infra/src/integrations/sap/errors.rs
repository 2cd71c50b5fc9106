//! SAP failure classification
//!
//! Every upstream failure reaches the client as the same 500 response, but
//! operators need to tell an expired service password from an unreachable
//! gateway. This module categorises reqwest failures for log fields.

use reqwest::StatusCode;

/// SAP error category for log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SapErrorCategory {
    /// Network is offline or unreachable
    NetworkOffline,

    /// Network request timed out
    NetworkTimeout,

    /// SAP server is unavailable (5xx errors)
    ServerUnavailable,

    /// Authentication failed (401, 403)
    Authentication,

    /// Rate limit exceeded (429)
    RateLimited,

    /// Rejected request (4xx except 401, 403, 429)
    Validation,

    /// Unknown or unclassified error
    Unknown,
}

impl SapErrorCategory {
    /// Classify HTTP status code into error category
    pub fn from_status_code(status: StatusCode) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Authentication,
            429 => Self::RateLimited,
            400..=499 => Self::Validation,
            500..=599 => Self::ServerUnavailable,
            _ => Self::Unknown,
        }
    }

    /// Classify a reqwest error by type
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::NetworkTimeout
        } else if err.is_connect() {
            Self::NetworkOffline
        } else if let Some(status) = err.status() {
            Self::from_status_code(status)
        } else {
            Self::Unknown
        }
    }

    /// Stable label for structured log fields
    pub fn label(&self) -> &'static str {
        match self {
            Self::NetworkOffline => "network_offline",
            Self::NetworkTimeout => "network_timeout",
            Self::ServerUnavailable => "server_unavailable",
            Self::Authentication => "authentication",
            Self::RateLimited => "rate_limited",
            Self::Validation => "validation",
            Self::Unknown => "unknown",
        }
    }
}
