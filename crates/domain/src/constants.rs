//! Relay constants
//!
//! Centralized location for domain-level constants used throughout the
//! relay.

// Server defaults
pub const DEFAULT_PORT: u16 = 3000;

// SAP request headers
pub const CSRF_TOKEN_HEADER: &str = "x-csrf-token";
pub const CSRF_TOKEN_FETCH: &str = "fetch";
pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const SAP_USER_CONTEXT_COOKIE: &str = "sap-usercontext";

// Mapping defaults
pub const DEFAULT_NOTIFICATION_PRIORITY: &str = "N/A";
pub const DEFAULT_EQUIPMENT_NUMBER: &str = "";
