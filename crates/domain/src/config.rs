//! Relay configuration structures
//!
//! Built once at startup by `pmrelay_infra::config` and treated as read-only
//! afterwards. Handlers receive it through the application context rather
//! than reading process globals.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PORT;
use crate::impl_label_conversions;
use crate::types::odata::SapResource;

/// Top-level relay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub sap: SapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Upstream SAP connection settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SapConfig {
    pub username: String,
    pub password: String,
    /// SAP client number sent in the `sap-usercontext` cookie.
    pub client: String,
    pub endpoints: SapEndpoints,
    /// Skip TLS certificate validation. Insecure; off unless explicitly set.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Send `x-csrf-token: fetch` on every request.
    #[serde(default = "default_csrf_fetch")]
    pub csrf_fetch: bool,
    /// Outbound request timeout. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_csrf_fetch() -> bool {
    true
}

impl std::fmt::Debug for SapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SapConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("client", &self.client)
            .field("endpoints", &self.endpoints)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("csrf_fetch", &self.csrf_fetch)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Entity-set URLs for each SAP resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SapEndpoints {
    pub login: String,
    pub plant_mapping: String,
    pub notifications: String,
    pub pm_details: String,
    pub work_orders: String,
}

impl SapEndpoints {
    /// Base URL configured for `resource`.
    pub fn url_for(&self, resource: SapResource) -> &str {
        match resource {
            SapResource::Login => &self.login,
            SapResource::PlantMapping => &self.plant_mapping,
            SapResource::Notifications => &self.notifications,
            SapResource::PmDetails => &self.pm_details,
            SapResource::WorkOrders => &self.work_orders,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl_label_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});
