//! Package search endpoint.

use crate::client::PkgDocsClient;
use crate::error::SdkResult;
use serde_json::Value;

const PACKAGE_SEARCH_PATH: &str = "/packages/search";

/// Packages API for finding packages by description.
pub struct PackagesApi<'a> {
    client: &'a PkgDocsClient,
}

impl<'a> PackagesApi<'a> {
    pub(crate) fn new(client: &'a PkgDocsClient) -> Self {
        Self { client }
    }

    /// Search packages matching `query`, returning at most `max_results`.
    pub async fn search(&self, query: &str, max_results: u32) -> SdkResult<Value> {
        self.client
            .http
            .get_with_query(
                PACKAGE_SEARCH_PATH,
                &[("q", query.to_string()), ("max_results", max_results.to_string())],
            )
            .await
    }
}
