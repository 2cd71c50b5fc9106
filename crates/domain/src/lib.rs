//! # PM Relay Domain
//!
//! Business domain types for the plant-maintenance SAP relay.
//!
//! This crate contains:
//! - Maintenance record types returned to clients (logins, plants,
//!   notifications, PM details, work orders)
//! - OData query and entry types shared by the gateway port and adapters
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other PM Relay crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
