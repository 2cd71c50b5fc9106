/// SAP integration module
///
/// This module provides the OData client the relay uses to read
/// plant-maintenance data from the SAP gateway.
///
/// # Architecture
///
/// - **Client**: `SapODataClient` - implements the `SapGateway` port
/// - **Decoding**: `odata` - turns Atom `entry`/`feed` XML into `ODataEntry` values
/// - **Errors**: `SapErrorCategory` - classifies failures for log output
///
/// # Usage
///
/// ```no_run
/// use pmrelay_core::SapGateway;
/// use pmrelay_domain::{SapConfig, SapResource};
/// use pmrelay_infra::integrations::sap::SapODataClient;
///
/// # async fn example(config: SapConfig) -> pmrelay_domain::Result<()> {
/// let client = SapODataClient::new(&config)?;
///
/// let resource = SapResource::WorkOrders;
/// let entries = client.fetch_feed(resource, &resource.query("1000")).await?;
/// println!("{} work orders", entries.len());
/// # Ok(())
/// # }
/// ```
///
/// # Authentication
///
/// Static Basic credentials from `SapConfig`, plus a
/// `sap-usercontext=sap-client=<client>` cookie.
///
/// # Error Handling
///
/// - Transport errors and non-2xx statuses: `RelayError::Upstream`
/// - Malformed XML: `RelayError::XmlParse`
/// - Missing `entry`/`feed`/`properties` nodes: `RelayError::UnexpectedStructure`
pub mod client;
pub mod errors;
pub mod odata;

pub use client::SapODataClient;
pub use errors::SapErrorCategory;
