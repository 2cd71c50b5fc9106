//! Application context - dependency injection container

use std::sync::Arc;

use pmrelay_core::{MaintenanceService, SapGateway};
use pmrelay_domain::{RelayConfig, Result};
use pmrelay_infra::SapODataClient;
use tracing::info;

/// Application context - holds configuration and services
///
/// Built once at startup and shared read-only between requests.
pub struct AppContext {
    pub config: RelayConfig,
    pub service: MaintenanceService,
}

impl AppContext {
    /// Create the context with the SAP OData client as gateway
    ///
    /// # Errors
    /// Returns an error if the SAP client cannot be built from `config`.
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = SapODataClient::new(&config.sap)?;
        info!(client = %config.sap.client, "SAP gateway initialised");
        Ok(Self::with_gateway(config, Arc::new(client)))
    }

    /// Create the context around an already-built gateway
    pub fn with_gateway(config: RelayConfig, gateway: Arc<dyn SapGateway>) -> Self {
        Self { config, service: MaintenanceService::new(gateway) }
    }
}
