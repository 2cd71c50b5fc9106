//! Field mappings from SAP entry properties to client records
//!
//! SAP field names are fixed by the upstream service; the client-facing
//! names live on the domain types.

use pmrelay_domain::constants::{DEFAULT_EQUIPMENT_NUMBER, DEFAULT_NOTIFICATION_PRIORITY};
use pmrelay_domain::{
    EmployeeLogin, Notification, ODataEntry, PlantAssignment, PmDetail, RelayError, Result,
    WorkOrder,
};

/// Date portion of an SAP timestamp (text before the first `T`).
///
/// `2024-05-01T10:00:00` becomes `2024-05-01`; values without a `T` are
/// returned unchanged.
pub fn date_only(value: &str) -> &str {
    value.split_once('T').map_or(value, |(date, _)| date)
}

fn required(entry: &ODataEntry, name: &str) -> Result<String> {
    entry
        .text(name)
        .ok_or_else(|| RelayError::UnexpectedStructure(format!("missing property {name}")))
}

fn date(entry: &ODataEntry, name: &str) -> Option<String> {
    entry.property(name).map(|value| date_only(value).to_string())
}

fn non_empty_or(entry: &ODataEntry, name: &str, default: &str) -> String {
    entry
        .property(name)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

pub fn employee_login(entry: &ODataEntry) -> Result<EmployeeLogin> {
    Ok(EmployeeLogin {
        employee_id: required(entry, "EmployeeId")?,
        password: required(entry, "Password")?,
    })
}

pub fn plant_assignment(entry: &ODataEntry) -> Result<PlantAssignment> {
    Ok(PlantAssignment {
        maint_engineer: required(entry, "MaintEngineer")?,
        plant_id: required(entry, "PlantId")?,
    })
}

pub fn notification(entry: &ODataEntry) -> Notification {
    Notification {
        notification_no: entry.text("Qmnum"),
        date: date(entry, "Qmdat"),
        notification_type: entry.text("Qmart"),
        description: entry.text("Qmtxt"),
        priority: non_empty_or(entry, "Priokx", DEFAULT_NOTIFICATION_PRIORITY),
    }
}

pub fn pm_detail(entry: &ODataEntry) -> PmDetail {
    PmDetail {
        plant: entry.text("Plant"),
        name: entry.text("Name1"),
        city: entry.text("Ort01"),
        region: entry.text("Regio"),
        country: entry.text("Land1"),
        engineer_id: entry.text("MaintEngineer"),
    }
}

pub fn work_order(entry: &ODataEntry) -> WorkOrder {
    WorkOrder {
        order_number: entry.text("Aufnr"),
        description: entry.text("Ktext"),
        order_type: entry.text("Auart"),
        start_date: date(entry, "Gstrs"),
        end_date: date(entry, "Gltrs"),
        equipment_number: non_empty_or(entry, "Equnr", DEFAULT_EQUIPMENT_NUMBER),
        cost_center: entry.text("Kostl"),
        plant: entry.text("Werks"),
        company_code: entry.text("Bukrs"),
        short_text: entry.text("Txt04"),
        long_text: entry.text("Txt30"),
    }
}
