//! Main client for the pkgdocs SDK.

use crate::api::{DocsApi, PackagesApi};
use crate::config::{default_user_agent, ClientConfig, DEFAULT_BASE_URL};
use crate::error::{SdkError, SdkResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the pkgdocs API.
///
/// Cheap to clone; clones share configuration and connection pool.
#[derive(Debug, Clone)]
pub struct PkgDocsClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl PkgDocsClient {
    /// Create a new client builder.
    pub fn builder() -> PkgDocsClientBuilder {
        PkgDocsClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> SdkResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SdkError::Config("api_key is required".to_string()));
        }
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the documentation search API.
    pub fn docs(&self) -> DocsApi<'_> {
        DocsApi::new(self)
    }

    /// Get the package search API.
    pub fn packages(&self) -> PackagesApi<'_> {
        PackagesApi::new(self)
    }
}

/// Builder for creating a PkgDocsClient.
pub struct PkgDocsClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PkgDocsClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the base URL of the backend. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> SdkResult<PkgDocsClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Config("api_key is required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            api_key,
            timeout: self.timeout,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        };

        PkgDocsClient::from_config(config)
    }
}

impl Default for PkgDocsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = PkgDocsClient::builder().api_key("sk-test").build().unwrap();

        assert_eq!(client.config().base_url.as_str(), "https://api.pkgdocs.dev/");
        assert!(client.config().timeout.is_none());
    }

    #[test]
    fn test_builder_requires_api_key() {
        let err = PkgDocsClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));

        let err = PkgDocsClient::builder().api_key("   ").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let err = PkgDocsClient::builder()
            .base_url("not a url")
            .api_key("sk-test")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_overrides() {
        let client = PkgDocsClient::builder()
            .base_url("http://localhost:9000")
            .api_key("sk-test")
            .timeout(Duration::from_secs(5))
            .user_agent("custom/1.0")
            .build()
            .unwrap();

        assert_eq!(client.config().timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.config().user_agent, "custom/1.0");
    }
}
