//! Basic SDK usage example.
//!
//! Searches for packages, then searches the documentation of the first hit.
//!
//! Run with: PKGDOCS_API_KEY=sk-... cargo run --example basic_usage

use pkgdocs_sdk::{PkgDocsClient, SdkError, SdkResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> SdkResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("PKGDOCS_API_KEY")
        .map_err(|_| SdkError::Config("PKGDOCS_API_KEY is not set".to_string()))?;

    let client = PkgDocsClient::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("Searching packages...");
    let packages = client.packages().search("json serialization", 5).await?;
    println!("{}", serde_json::to_string_pretty(&packages)?);

    let first = packages
        .get("packages")
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str());

    if let Some(name) = first {
        println!("\nSearching documentation of {}...", name);
        let docs = client.docs().search(name, "getting started").await?;
        println!("{}", serde_json::to_string_pretty(&docs)?);
    }

    Ok(())
}
