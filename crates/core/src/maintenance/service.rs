//! Maintenance service - core business logic

use std::sync::Arc;

use pmrelay_domain::{
    EmployeeLogin, Notification, PlantAssignment, PmDetail, Result, SapResource, WorkOrder,
};
use tracing::debug;

use super::mapping;
use crate::sap_ports::SapGateway;

/// Looks up maintenance data in SAP and reshapes it for the client.
pub struct MaintenanceService {
    gateway: Arc<dyn SapGateway>,
}

impl MaintenanceService {
    /// Create a new maintenance service
    pub fn new(gateway: Arc<dyn SapGateway>) -> Self {
        Self { gateway }
    }

    /// Look up the login record for an employee
    pub async fn login(&self, employee_id: &str) -> Result<EmployeeLogin> {
        let resource = SapResource::Login;
        let entry = self.gateway.fetch_entry(resource, &resource.query(employee_id)).await?;
        mapping::employee_login(&entry)
    }

    /// Plants assigned to a maintenance engineer
    pub async fn plant_mapping(&self, engineer_id: &str) -> Result<Vec<PlantAssignment>> {
        let resource = SapResource::PlantMapping;
        let entries = self.gateway.fetch_feed(resource, &resource.query(engineer_id)).await?;
        debug!(%resource, count = entries.len(), "mapping plant assignments");
        entries.iter().map(mapping::plant_assignment).collect()
    }

    /// Notifications raised for a plant
    pub async fn notifications(&self, plant_id: &str) -> Result<Vec<Notification>> {
        let resource = SapResource::Notifications;
        let entries = self.gateway.fetch_feed(resource, &resource.query(plant_id)).await?;
        debug!(%resource, count = entries.len(), "mapping notifications");
        Ok(entries.iter().map(mapping::notification).collect())
    }

    /// PM organisational details for an engineer
    pub async fn pm_details(&self, engineer_id: &str) -> Result<Vec<PmDetail>> {
        let resource = SapResource::PmDetails;
        let entries = self.gateway.fetch_feed(resource, &resource.query(engineer_id)).await?;
        debug!(%resource, count = entries.len(), "mapping PM details");
        Ok(entries.iter().map(mapping::pm_detail).collect())
    }

    /// Work orders scheduled at a plant
    pub async fn work_orders(&self, plant_id: &str) -> Result<Vec<WorkOrder>> {
        let resource = SapResource::WorkOrders;
        let entries = self.gateway.fetch_feed(resource, &resource.query(plant_id)).await?;
        debug!(%resource, count = entries.len(), "mapping work orders");
        Ok(entries.iter().map(mapping::work_order).collect())
    }
}
