//! SearXNG MCP Server
//!
//! Web search via a self-hosted SearXNG instance.
//!
//! # Configuration
//! Set `SEARXNG_URL` env var or configure in `~/.config/searxng-mcp.toml`

use rmcp::{transport::stdio, ServiceExt};

mod config;
mod searxng;
mod server;
mod types;

use config::Config;
use server::SearxngMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("searxng_mcp")?;

    tracing::info!("Starting SearXNG MCP Server");

    let config = Config::load()?;
    tracing::info!("SearXNG URL: {}", config.base_url);

    let server = SearxngMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
