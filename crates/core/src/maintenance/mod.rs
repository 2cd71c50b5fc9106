//! Plant-maintenance lookups
//!
//! [`MaintenanceService`] drives one gateway call per operation and maps the
//! returned entries with the functions in [`mapping`].

pub mod mapping;
pub mod service;

pub use mapping::date_only;
pub use service::MaintenanceService;
