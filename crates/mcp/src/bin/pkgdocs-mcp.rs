// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use pkgdocs_mcp::config::{api_key_from_env, Args, ServerConfig, DEFAULT_LOG_FILTER};
use pkgdocs_mcp::server::McpServer;
use pkgdocs_mcp::tools::ToolRegistry;
use pkgdocs_mcp::{Backend, Dispatcher};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("pkgdocs MCP server starting...");

    let config = ServerConfig::load(&args, api_key_from_env())?;
    tracing::info!(base_url = %config.backend.base_url, "Using backend");

    let backend: Arc<dyn Backend> = Arc::new(config.build_client()?);
    let registry = ToolRegistry::with_backend(backend);

    tracing::info!("Registered {} tools", registry.len());

    // Start MCP server
    let server = McpServer::new(Dispatcher::new(registry));
    server.start().await?;

    Ok(())
}
