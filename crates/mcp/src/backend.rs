// Seam between the tools and the remote search backend

use async_trait::async_trait;
use pkgdocs_sdk::{PkgDocsClient, SdkResult};
use serde_json::Value;

/// The two backend operations the tools need.
///
/// Implementations must be safe to call concurrently; the dispatcher
/// shares one instance across every in-flight tool call.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Search the documentation of one package.
    async fn fetch_documentation(&self, package_name: &str, query: &str) -> SdkResult<Value>;

    /// Search packages by free-text description.
    async fn fetch_packages(&self, query: &str, max_results: u32) -> SdkResult<Value>;
}

#[async_trait]
impl Backend for PkgDocsClient {
    async fn fetch_documentation(&self, package_name: &str, query: &str) -> SdkResult<Value> {
        self.docs().search(package_name, query).await
    }

    async fn fetch_packages(&self, query: &str, max_results: u32) -> SdkResult<Value> {
        self.packages().search(query, max_results).await
    }
}
