use anyhow::{bail, Context, Result};
use clap::Parser;
use pkgdocs_sdk::{PkgDocsClient, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the backend API key.
pub const API_KEY_ENV: &str = "PKGDOCS_API_KEY";

/// Log filter used when `RUST_LOG` is unset. Covers every crate of the
/// server; a bare `pkgdocs` directive would match none of their targets.
pub const DEFAULT_LOG_FILTER: &str = "pkgdocs_core=info,pkgdocs_sdk=info,pkgdocs_mcp=info";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pkgdocs-mcp")]
#[command(about = "MCP server exposing package search and package documentation search", long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "pkgdocs.toml")]
    pub config: PathBuf,

    /// Backend base URL (overrides the configuration file)
    #[arg(long, env = "PKGDOCS_BASE_URL")]
    pub base_url: Option<String>,

    /// Backend request timeout in seconds (overrides the configuration file)
    #[arg(long, env = "PKGDOCS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(skip)]
    pub api_key: String,

    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

/// Read the API key from the environment. Only the binary calls this; the
/// rest of the crate receives the key through [`ServerConfig`].
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok()
}

impl ServerConfig {
    /// Build the configuration from the optional config file, then the
    /// command line / environment overrides in `args`.
    ///
    /// A missing or blank `api_key` is a startup error.
    pub fn load(args: &Args, api_key: Option<String>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("{} is not set; refusing to start without an API key", API_KEY_ENV),
        };

        // Load config file if it exists, otherwise use defaults
        let mut config: Self = if args.config.exists() {
            let content = std::fs::read_to_string(&args.config).with_context(|| {
                format!(
                    "Failed to read configuration file {}",
                    args.config.display()
                )
            })?;
            toml::from_str(&content).context("Failed to parse configuration file")?
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Self {
                api_key: String::new(),
                backend: Default::default(),
            }
        };

        config.api_key = api_key;
        if let Some(base_url) = &args.base_url {
            config.backend.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = args.timeout_secs {
            config.backend.timeout_secs = Some(timeout_secs);
        }
        if config.backend.timeout_secs == Some(0) {
            bail!("timeout_secs must be greater than zero");
        }

        Ok(config)
    }

    /// Get the request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.backend.timeout_secs.map(Duration::from_secs)
    }

    /// Build the backend client described by this configuration
    pub fn build_client(&self) -> Result<PkgDocsClient> {
        let mut builder = PkgDocsClient::builder()
            .base_url(self.backend.base_url.clone())
            .api_key(self.api_key.clone());
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.backend.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        builder.build().context("Failed to create backend client")
    }
}
