//! Domain types and models

pub mod maintenance;
pub mod odata;

pub use maintenance::{EmployeeLogin, Notification, PlantAssignment, PmDetail, WorkOrder};
pub use odata::{ODataEntry, ODataQuery, SapResource};
