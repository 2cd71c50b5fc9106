//! SAP gateway port interfaces

use async_trait::async_trait;
use pmrelay_domain::{ODataEntry, ODataQuery, Result, SapResource};

/// Read access to SAP OData entity sets.
///
/// Implementations issue exactly one upstream request per call and decode
/// the response into property maps. Failures are reported as
/// `RelayError::Upstream`, `RelayError::XmlParse` or
/// `RelayError::UnexpectedStructure`.
#[async_trait]
pub trait SapGateway: Send + Sync {
    /// Fetch a single entity addressed by key.
    async fn fetch_entry(&self, resource: SapResource, query: &ODataQuery) -> Result<ODataEntry>;

    /// Fetch every entry of a filtered feed. An empty feed is not an error.
    async fn fetch_feed(&self, resource: SapResource, query: &ODataQuery)
        -> Result<Vec<ODataEntry>>;
}
