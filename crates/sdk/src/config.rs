//! Configuration types for the pkgdocs SDK.

use std::fmt;
use std::time::Duration;
use url::Url;

/// Base URL of the hosted pkgdocs backend.
pub const DEFAULT_BASE_URL: &str = "https://api.pkgdocs.dev";

/// Configuration for the pkgdocs client.
///
/// Read-only once the client is built; every request shares it.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the backend.
    pub base_url: Url,
    /// API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Request timeout. `None` keeps the HTTP stack's default.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

pub fn default_user_agent() -> String {
    format!("pkgdocs-sdk/{}", env!("CARGO_PKG_VERSION"))
}
