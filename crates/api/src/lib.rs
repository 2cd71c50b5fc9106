//! # PM Relay API
//!
//! HTTP application layer - routes, handlers and the server entry point.
//!
//! This crate contains:
//! - The axum router exposing the maintenance endpoints
//! - Application context (dependency injection)
//! - HTTP error responses and tracing setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Turns service results into JSON responses

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
