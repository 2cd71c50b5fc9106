//! HTTP error responses
//!
//! Every failure on a maintenance route is reported as `500` with
//! `{ "error": <message>, "details"?: <upstream error text> }`. The message
//! depends on the route and the failure kind; `details` is only present for
//! upstream transport failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pmrelay_domain::{RelayError, SapResource};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Failure of a maintenance route.
#[derive(Debug, Error)]
#[error("{resource} failed: {source}")]
pub struct ApiError {
    resource: SapResource,
    #[source]
    source: RelayError,
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(resource: SapResource, source: RelayError) -> Self {
        Self { resource, source }
    }

    /// Client-facing body for this failure.
    pub fn body(&self) -> ErrorBody {
        match &self.source {
            RelayError::Upstream(details) => ErrorBody {
                error: self.resource.request_failed_message(),
                details: Some(details.clone()),
            },
            RelayError::XmlParse(_) => {
                ErrorBody { error: self.resource.parse_failed_message(), details: None }
            }
            RelayError::UnexpectedStructure(_)
            | RelayError::Config(_)
            | RelayError::Internal(_) => {
                ErrorBody { error: self.resource.unexpected_structure_message(), details: None }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            RelayError::Config(_) | RelayError::Internal(_) => {
                error!(
                    resource = %self.resource,
                    kind = self.source.label(),
                    error = %self.source,
                    "request failed"
                );
            }
            _ => {
                warn!(
                    resource = %self.resource,
                    kind = self.source.label(),
                    error = %self.source,
                    "request failed"
                );
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.body())).into_response()
    }
}
