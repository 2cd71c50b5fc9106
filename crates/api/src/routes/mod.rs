//! HTTP routes
//!
//! ```text
//! GET /health
//! GET /api/maintenance/login/{employee_id}
//! GET /api/maintenance/plant-mapping/{engineer_id}
//! GET /api/maintenance/notifications/{plant_id}
//! GET /api/maintenance/pm-details/{engineer_id}
//! GET /api/maintenance/work-orders/{plant_id}
//! ```

mod health;
mod maintenance;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

pub use health::HealthResponse;
pub use maintenance::{
    NotificationsResponse, PlantMappingResponse, PmDetailsResponse, WorkOrdersResponse,
};

/// Shared application state.
pub type AppState = Arc<AppContext>;

/// Build the relay router with CORS and request tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/maintenance", maintenance::routes())
        .merge(health::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
