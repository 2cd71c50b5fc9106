//! # PM Relay Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The SAP gateway port (trait) the infrastructure layer implements
//! - The maintenance service that turns OData entries into client records
//!
//! ## Architecture Principles
//! - Only depends on `pmrelay-domain`
//! - No HTTP or XML code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod maintenance;
pub mod sap_ports;

pub use maintenance::MaintenanceService;
pub use sap_ports::SapGateway;
