//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides the small amount of functionality every MCP server
//! in this workspace needs:
//!
//! - **Initialization**: [`init_tracing`] for logging to stderr (stdout is
//!   reserved for the MCP protocol)
//! - **Results**: [`json_success`] for serializing tool output into a
//!   `CallToolResult`
//! - **Errors**: the [`McpResult`] alias and [`internal_error`] helper
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{json_success, McpResult};
//! use rmcp::model::CallToolResult;
//!
//! fn my_tool(&self) -> McpResult<CallToolResult> {
//!     let data = get_some_data();
//!     json_success(&data)
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, McpResult};
pub use init::init_tracing;
pub use result::{json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
