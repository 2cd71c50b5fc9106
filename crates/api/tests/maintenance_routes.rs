//! Integration tests for the maintenance routes
//!
//! Each test drives the full router against a wiremock SAP gateway, so URL
//! construction, XML decoding, field mapping and error responses are all
//! exercised end to end.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::{
    closed_port_url, entry, entry_document, feed, get_json, relay_at, relay_for, ATOM_NAMESPACES,
};

async fn mount_xml(server: &MockServer, set: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(set))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_returns_employee_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/LoginSet(EmployeeId='E123')"))
        .and(header("authorization", "Basic c3ZjOnNlY3JldA=="))
        .and(header("cookie", "sap-usercontext=sap-client=100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(entry_document(&[
            ("EmployeeId", Some("E123")),
            ("Password", Some("hunter2")),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/login/E123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "employeeId": "E123", "password": "hunter2" }));
}

#[tokio::test]
async fn login_without_password_is_structure_error() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "/LoginSet(EmployeeId='E123')",
        entry_document(&[("EmployeeId", Some("E123"))]),
    )
    .await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/login/E123").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Unexpected SAP response structure" }));
}

#[tokio::test]
async fn plant_mapping_maps_every_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PlantMappingSet"))
        .and(query_param("$filter", "(MaintEngineer eq 'ENG01')"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[
            entry(&[("MaintEngineer", Some("ENG01")), ("PlantId", Some("1000"))]),
            entry(&[("MaintEngineer", Some("ENG01")), ("PlantId", Some("2000"))]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) =
        get_json(relay_for(&server), "/api/maintenance/plant-mapping/ENG01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "engineerId": "ENG01",
            "plants": [
                { "maintEngineer": "ENG01", "plantId": "1000" },
                { "maintEngineer": "ENG01", "plantId": "2000" }
            ]
        })
    );
}

#[tokio::test]
async fn notifications_truncate_dates_and_default_priority() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/NotificationSet"))
        .and(query_param("$filter", "(Iwerk eq '1000')"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[
            entry(&[
                ("Qmnum", Some("10001")),
                ("Qmdat", Some("2024-03-01T00:00:00")),
                ("Qmart", Some("M1")),
                ("Qmtxt", Some("Pump leaking")),
                ("Priokx", Some("High")),
            ]),
            entry(&[
                ("Qmnum", Some("10002")),
                ("Qmdat", Some("2024-03-02T08:30:00")),
                ("Qmart", Some("M2")),
                ("Qmtxt", Some("Noise")),
                ("Priokx", Some("")),
            ]),
        ])))
        .mount(&server)
        .await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/notifications/1000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "plantId": "1000",
            "notifications": [
                {
                    "notificationNo": "10001",
                    "date": "2024-03-01",
                    "type": "M1",
                    "description": "Pump leaking",
                    "priority": "High"
                },
                {
                    "notificationNo": "10002",
                    "date": "2024-03-02",
                    "type": "M2",
                    "description": "Noise",
                    "priority": "N/A"
                }
            ]
        })
    );
}

#[tokio::test]
async fn pm_details_omit_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PmDetailsSet"))
        .and(query_param("$filter", "(MaintEngineer eq 'ENG01')"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[entry(&[
            ("Plant", Some("1000")),
            ("Name1", Some("North Plant")),
            ("Ort01", Some("Hamburg")),
            ("Regio", None),
            ("Land1", Some("DE")),
            ("MaintEngineer", Some("ENG01")),
        ])])))
        .mount(&server)
        .await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/pm-details/ENG01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "engineerId": "ENG01",
            "pmDetails": [{
                "plant": "1000",
                "name": "North Plant",
                "city": "Hamburg",
                "country": "DE",
                "engineerId": "ENG01"
            }]
        })
    );
}

#[tokio::test]
async fn work_orders_map_fields_and_default_equipment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/WorkOrderSet"))
        .and(query_param("$filter", "(Werks eq '1000')"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[entry(&[
            ("Aufnr", Some("4000001")),
            ("Ktext", Some("Replace bearing")),
            ("Auart", Some("PM01")),
            ("Gstrs", Some("2024-04-01T00:00:00")),
            ("Gltrs", Some("2024-04-05T00:00:00")),
            ("Equnr", None),
            ("Kostl", Some("CC100")),
            ("Werks", Some("1000")),
            ("Bukrs", Some("1000")),
            ("Txt04", Some("REL")),
            ("Txt30", Some("Released")),
        ])])))
        .mount(&server)
        .await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/work-orders/1000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "plantId": "1000",
            "workOrders": [{
                "orderNumber": "4000001",
                "description": "Replace bearing",
                "orderType": "PM01",
                "startDate": "2024-04-01",
                "endDate": "2024-04-05",
                "equipmentNumber": "",
                "costCenter": "CC100",
                "plant": "1000",
                "companyCode": "1000",
                "shortText": "REL",
                "longText": "Released"
            }]
        })
    );
}

#[tokio::test]
async fn empty_work_order_feed_is_empty_list() {
    let server = MockServer::start().await;
    mount_xml(&server, "/WorkOrderSet", feed(&[])).await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/work-orders/1000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "plantId": "1000", "workOrders": [] }));
}

#[tokio::test]
async fn upstream_failure_reports_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/NotificationSet"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/notifications/1000").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "SAP notifications request failed",
            "details": "Request failed with status code 500"
        })
    );
}

#[tokio::test]
async fn unreachable_gateway_reports_transport_details() {
    let app = relay_at(&closed_port_url());

    let (status, body) = get_json(app, "/api/maintenance/work-orders/1000").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "SAP work orders request failed");
    let details = body["details"].as_str().expect("details should be a string");
    assert!(details.contains("error sending request"), "unexpected details: {details}");
}

#[tokio::test]
async fn malformed_xml_reports_parse_error_without_details() {
    let server = MockServer::start().await;
    mount_xml(&server, "/PmDetailsSet", "<feed><entry></feed>".to_string()).await;

    let (status, body) = get_json(relay_for(&server), "/api/maintenance/pm-details/ENG01").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to parse XML" }));
}

#[tokio::test]
async fn missing_feed_is_structure_error() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "/PlantMappingSet",
        format!("<error {ATOM_NAMESPACES}><message>not found</message></error>"),
    )
    .await;

    let (status, body) =
        get_json(relay_for(&server), "/api/maintenance/plant-mapping/ENG01").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Unexpected SAP feed structure" }));
}

#[tokio::test]
async fn health_does_not_contact_sap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get_json(relay_for(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
