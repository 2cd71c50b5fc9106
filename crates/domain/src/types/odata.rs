//! OData request and response primitives
//!
//! These types sit between the gateway port and its adapters: the core asks
//! for a [`SapResource`] with an [`ODataQuery`], the adapter answers with
//! decoded [`ODataEntry`] values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::impl_label_conversions;

/// SAP entity sets the relay reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SapResource {
    Login,
    PlantMapping,
    Notifications,
    PmDetails,
    WorkOrders,
}

impl_label_conversions!(SapResource {
    Login => "login",
    PlantMapping => "plant-mapping",
    Notifications => "notifications",
    PmDetails => "pm-details",
    WorkOrders => "work-orders",
});

impl SapResource {
    /// SAP property used to select records for this resource.
    pub fn query_field(self) -> &'static str {
        match self {
            Self::Login => "EmployeeId",
            Self::PlantMapping | Self::PmDetails => "MaintEngineer",
            Self::Notifications => "Iwerk",
            Self::WorkOrders => "Werks",
        }
    }

    /// Build the query for a client-supplied identifier.
    ///
    /// Login addresses a single entity by key; every other resource filters
    /// a collection.
    pub fn query(self, value: impl Into<String>) -> ODataQuery {
        let field = self.query_field();
        match self {
            Self::Login => ODataQuery::Key { field, value: value.into() },
            _ => ODataQuery::Filter { field, value: value.into() },
        }
    }

    /// Message returned when the upstream call itself fails.
    pub fn request_failed_message(self) -> &'static str {
        match self {
            Self::Login => "SAP login request failed",
            Self::PlantMapping => "SAP plant mapping request failed",
            Self::Notifications => "SAP notifications request failed",
            Self::PmDetails => "SAP PM details request failed",
            Self::WorkOrders => "SAP work orders request failed",
        }
    }

    /// Message returned when the response body is not XML.
    pub fn parse_failed_message(self) -> &'static str {
        match self {
            Self::Login => "Failed to parse XML response",
            _ => "Failed to parse XML",
        }
    }

    /// Message returned when the XML lacks the expected nodes.
    pub fn unexpected_structure_message(self) -> &'static str {
        match self {
            Self::Login => "Unexpected SAP response structure",
            Self::PlantMapping => "Unexpected SAP feed structure",
            Self::Notifications => "Unexpected SAP notifications structure",
            Self::PmDetails => "Unexpected SAP PM details structure",
            Self::WorkOrders => "Unexpected SAP work orders structure",
        }
    }
}

/// Selection appended to an entity-set URL.
///
/// Values are interpolated verbatim; SAP applies its own filter syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ODataQuery {
    /// Key predicate, e.g. `(EmployeeId='E123')`.
    Key { field: &'static str, value: String },
    /// `$filter` expression, e.g. `?$filter=(Werks eq '1000')`.
    Filter { field: &'static str, value: String },
}

impl ODataQuery {
    /// Render the URL suffix for this query.
    pub fn render(&self) -> String {
        match self {
            Self::Key { field, value } => format!("({field}='{value}')"),
            Self::Filter { field, value } => format!("?$filter=({field} eq '{value}')"),
        }
    }

    /// Append the rendered query to an entity-set URL.
    pub fn apply_to(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.render())
    }
}

/// Properties of a single feed entry keyed by SAP field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ODataEntry {
    properties: BTreeMap<String, String>,
}

impl ODataEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a property value, replacing any earlier value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`ODataEntry::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Owned copy of a property value.
    pub fn text(&self, name: &str) -> Option<String> {
        self.property(name).map(str::to_string)
    }
}
