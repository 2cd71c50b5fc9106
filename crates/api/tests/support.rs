//! Shared helpers for route tests: a wiremock SAP stand-in and a router
//! wired against it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pmrelay_api::{router, AppContext};
use pmrelay_domain::{LoggingConfig, RelayConfig, SapConfig, SapEndpoints, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

pub const ATOM_NAMESPACES: &str = concat!(
    r#"xmlns="http://www.w3.org/2005/Atom" "#,
    r#"xmlns:m="http://schemas.microsoft.com/ado/2007/08/dataservices/metadata" "#,
    r#"xmlns:d="http://schemas.microsoft.com/ado/2007/08/dataservices""#,
);

/// Relay configuration pointing every entity set at `base_url`.
pub fn test_config(base_url: &str) -> RelayConfig {
    RelayConfig {
        server: ServerConfig::default(),
        sap: SapConfig {
            username: "svc".to_string(),
            password: "secret".to_string(),
            client: "100".to_string(),
            endpoints: SapEndpoints {
                login: format!("{base_url}/LoginSet"),
                plant_mapping: format!("{base_url}/PlantMappingSet"),
                notifications: format!("{base_url}/NotificationSet"),
                pm_details: format!("{base_url}/PmDetailsSet"),
                work_orders: format!("{base_url}/WorkOrderSet"),
            },
            accept_invalid_certs: false,
            csrf_fetch: true,
            timeout_secs: Some(5),
        },
        logging: LoggingConfig::default(),
    }
}

/// Router backed by the real SAP client talking to `server`.
pub fn relay_for(server: &MockServer) -> Router {
    relay_at(&server.uri())
}

/// Router whose entity sets all live under `base_url`.
pub fn relay_at(base_url: &str) -> Router {
    let context =
        AppContext::new(test_config(base_url)).expect("failed to build application context");
    router(Arc::new(context))
}

/// Base URL of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Atom entry with the given `d:` properties (`None` renders `m:null`).
pub fn entry(properties: &[(&str, Option<&str>)]) -> String {
    let props: String = properties
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!("<d:{name}>{value}</d:{name}>"),
            None => format!(r#"<d:{name} m:null="true"/>"#),
        })
        .collect();

    format!(
        concat!(
            r#"<entry><id>id</id><content type="application/xml">"#,
            r#"<m:properties>{props}</m:properties></content></entry>"#,
        ),
        props = props
    )
}

/// Atom feed wrapping `entries`.
pub fn feed(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><feed {}><title type="text">Set</title>{}</feed>"#,
        ATOM_NAMESPACES,
        entries.concat()
    )
}

/// Standalone entry document (single-entity reads).
pub fn entry_document(properties: &[(&str, Option<&str>)]) -> String {
    let body = entry(properties);
    let body = body.replacen("<entry>", &format!("<entry {ATOM_NAMESPACES}>"), 1);
    format!(r#"<?xml version="1.0" encoding="utf-8"?>{body}"#)
}

/// Issue a GET against the router and decode the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router should respond");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).expect("response should be JSON");
    (status, json)
}
