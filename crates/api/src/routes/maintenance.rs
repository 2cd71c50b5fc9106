//! Maintenance handlers
//!
//! Each handler echoes its path parameter next to the mapped SAP records.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use pmrelay_domain::{
    EmployeeLogin, Notification, PlantAssignment, PmDetail, SapResource, WorkOrder,
};
use serde::Serialize;
use tracing::info;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantMappingResponse {
    pub engineer_id: String,
    pub plants: Vec<PlantAssignment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub plant_id: String,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PmDetailsResponse {
    pub engineer_id: String,
    pub pm_details: Vec<PmDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrdersResponse {
    pub plant_id: String,
    pub work_orders: Vec<WorkOrder>,
}

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/login/{employee_id}", get(login))
        .route("/plant-mapping/{engineer_id}", get(plant_mapping))
        .route("/notifications/{plant_id}", get(notifications))
        .route("/pm-details/{engineer_id}", get(pm_details))
        .route("/work-orders/{plant_id}", get(work_orders))
}

async fn login(
    State(ctx): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeLogin>, ApiError> {
    info!(%employee_id, "login lookup");
    let login = ctx
        .service
        .login(&employee_id)
        .await
        .map_err(|err| ApiError::new(SapResource::Login, err))?;
    Ok(Json(login))
}

async fn plant_mapping(
    State(ctx): State<AppState>,
    Path(engineer_id): Path<String>,
) -> Result<Json<PlantMappingResponse>, ApiError> {
    let plants = ctx
        .service
        .plant_mapping(&engineer_id)
        .await
        .map_err(|err| ApiError::new(SapResource::PlantMapping, err))?;
    info!(%engineer_id, count = plants.len(), "plant mapping resolved");
    Ok(Json(PlantMappingResponse { engineer_id, plants }))
}

async fn notifications(
    State(ctx): State<AppState>,
    Path(plant_id): Path<String>,
) -> Result<Json<NotificationsResponse>, ApiError> {
    let notifications = ctx
        .service
        .notifications(&plant_id)
        .await
        .map_err(|err| ApiError::new(SapResource::Notifications, err))?;
    info!(%plant_id, count = notifications.len(), "notifications resolved");
    Ok(Json(NotificationsResponse { plant_id, notifications }))
}

async fn pm_details(
    State(ctx): State<AppState>,
    Path(engineer_id): Path<String>,
) -> Result<Json<PmDetailsResponse>, ApiError> {
    let pm_details = ctx
        .service
        .pm_details(&engineer_id)
        .await
        .map_err(|err| ApiError::new(SapResource::PmDetails, err))?;
    info!(%engineer_id, count = pm_details.len(), "PM details resolved");
    Ok(Json(PmDetailsResponse { engineer_id, pm_details }))
}

async fn work_orders(
    State(ctx): State<AppState>,
    Path(plant_id): Path<String>,
) -> Result<Json<WorkOrdersResponse>, ApiError> {
    let work_orders = ctx
        .service
        .work_orders(&plant_id)
        .await
        .map_err(|err| ApiError::new(SapResource::WorkOrders, err))?;
    info!(%plant_id, count = work_orders.len(), "work orders resolved");
    Ok(Json(WorkOrdersResponse { plant_id, work_orders }))
}
