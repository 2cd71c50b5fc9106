/// SAP OData client for plant-maintenance entity sets
use std::time::Duration;

use async_trait::async_trait;
use pmrelay_core::sap_ports::SapGateway;
use pmrelay_domain::constants::{
    CSRF_TOKEN_FETCH, CSRF_TOKEN_HEADER, SAP_USER_CONTEXT_COOKIE, XML_CONTENT_TYPE,
};
use pmrelay_domain::{
    ODataEntry, ODataQuery, RelayError, Result, SapConfig, SapEndpoints, SapResource,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::Method;
use tracing::{debug, warn};

use super::errors::SapErrorCategory;
use super::odata;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// OData client for the SAP gateway
///
/// Sends one GET per lookup with Basic authentication, XML content
/// negotiation headers and the `sap-usercontext` cookie that pins the SAP
/// client.
pub struct SapODataClient {
    endpoints: SapEndpoints,
    username: String,
    password: String,
    http_client: HttpClient,
}

impl SapODataClient {
    /// Create a new SAP client from the relay configuration
    ///
    /// # Errors
    /// Returns `RelayError::Config` if the SAP client number cannot be used
    /// in a cookie header, or `RelayError::Internal` if the HTTP client
    /// cannot be built.
    pub fn new(config: &SapConfig) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .default_headers(default_headers(config)?)
            .accept_invalid_certs(config.accept_invalid_certs);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if config.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for SAP requests");
        }

        Ok(Self {
            endpoints: config.endpoints.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            http_client: builder.build()?,
        })
    }

    /// Full request URL for a resource query
    pub fn url_for(&self, resource: SapResource, query: &ODataQuery) -> String {
        query.apply_to(self.endpoints.url_for(resource))
    }

    /// GET the rendered query and return the raw XML body
    async fn fetch_xml(&self, resource: SapResource, query: &ODataQuery) -> Result<String> {
        let url = self.url_for(resource, query);

        let request_builder = self
            .http_client
            .request(Method::GET, &url)
            .basic_auth(&self.username, Some(&self.password));

        let result = match self.http_client.send(request_builder).await {
            Ok(response) => response.text().await,
            Err(err) => Err(err),
        };

        match result {
            Ok(body) => {
                debug!(%resource, bytes = body.len(), "received SAP response");
                Ok(body)
            }
            Err(err) => {
                let category = SapErrorCategory::from_reqwest(&err);
                warn!(%resource, category = category.label(), error = %err, "SAP request failed");
                Err(RelayError::from(InfraError::from(err)))
            }
        }
    }
}

#[async_trait]
impl SapGateway for SapODataClient {
    async fn fetch_entry(&self, resource: SapResource, query: &ODataQuery) -> Result<ODataEntry> {
        let body = self.fetch_xml(resource, query).await?;
        odata::parse_entry(&body)
    }

    async fn fetch_feed(
        &self,
        resource: SapResource,
        query: &ODataQuery,
    ) -> Result<Vec<ODataEntry>> {
        let body = self.fetch_xml(resource, query).await?;
        odata::parse_feed(&body)
    }
}

fn default_headers(config: &SapConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(XML_CONTENT_TYPE));

    // SAP only issues a token in response; nothing here replays it.
    if config.csrf_fetch {
        headers.insert(
            HeaderName::from_static(CSRF_TOKEN_HEADER),
            HeaderValue::from_static(CSRF_TOKEN_FETCH),
        );
    }

    let cookie = format!("{SAP_USER_CONTEXT_COOKIE}=sap-client={}", config.client);
    let cookie = HeaderValue::from_str(&cookie).map_err(|e| {
        RelayError::Config(format!("SAP client is not a valid cookie value: {}", e))
    })?;
    headers.insert(COOKIE, cookie);

    Ok(headers)
}
