//! # PM Relay Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - SAP OData integration (XML decoding, gateway client)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `pmrelay-core`
//! - Depends on `pmrelay-domain` and `pmrelay-core`
//! - Contains all "impure" code (network I/O, environment, files)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::sap::SapODataClient;
