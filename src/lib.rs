//! LocaBriques MCP Server
//!
//! A Model Context Protocol (MCP) server exposing the LocaBriques LEGO® set
//! rental marketplace REST API (https://locabriques.fr) as callable tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the
//!   STDIO transport
//! - **api**: the shared upstream HTTP client, error normalization and the
//!   multipart form builder for shop profile updates
//! - **domains::tools**: the tool definitions, one file per resource family,
//!   and the router that assembles them
//!
//! # Example
//!
//! ```rust,no_run
//! use locabriques_mcp::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
