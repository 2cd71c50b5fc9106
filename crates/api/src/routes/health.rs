use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::AppState;

/// Liveness probe body. SAP is not contacted.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub(super) fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
