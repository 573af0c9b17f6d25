//! SearXNG MCP Library
//!
//! Web search via a self-hosted SearXNG instance - privacy-preserving
//! aggregated results, no API keys required.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use searxng_mcp::{Config, SearxngMcpServer};
//!
//! let server = SearxngMcpServer::new(Config::load()?)?;
//! // Serve via stdio or call the tool in-process
//! ```
//!
//! # Configuration
//! Set `SEARXNG_URL` env var or configure in `~/.config/searxng-mcp.toml`

pub mod config;
pub mod searxng;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::SearxngMcpServer;

// Re-export parameter and configuration types for direct API usage
pub use config::Config;
pub use server::SearchParams;
pub use types::{Envelope, SearchResult};
