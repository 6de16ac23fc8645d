//! # pkgdocs SDK
//!
//! Rust client for the pkgdocs package search and documentation search API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pkgdocs_sdk::{PkgDocsClient, SdkResult};
//!
//! #[tokio::main]
//! async fn main() -> SdkResult<()> {
//!     let client = PkgDocsClient::builder()
//!         .api_key("sk-your-api-key")
//!         .build()?;
//!
//!     let packages = client.packages().search("async http client", 5).await?;
//!     println!("{}", packages);
//!
//!     let docs = client.docs().search("reqwest", "timeouts").await?;
//!     println!("{}", docs);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{PkgDocsClient, PkgDocsClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{SdkError, SdkResult};
