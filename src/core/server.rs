//! MCP Server implementation and lifecycle management.
//!
//! The server handler owns the shared [`ApiClient`] and the tool router.
//! Tool definitions live in `domains/tools/definitions/`, one file per
//! LocaBriques resource family; the router is built dynamically in
//! `domains/tools/router.rs`, so registering a new tool does not require
//! modifying this file.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as CoreResult;
use crate::api::ApiClient;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp. Tool calls are dispatched
/// through the router; each route holds a clone of the shared API client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// The upstream HTTP client is constructed once here and shared by every
    /// tool route. Fails only if the client cannot be built.
    pub fn new(config: Config) -> CoreResult<Self> {
        let client = Arc::new(ApiClient::new(&config.api)?);
        let config = Arc::new(config);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(
                "Tools for the LocaBriques LEGO set rental marketplace: browse \
                 the rental catalog, themes and shops, manage your shop profile \
                 and coupons, your per-bags inventories, and your wish list."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_with_defaults() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "mcp-server-locabriques");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_handler_advertises_tools_capability() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "mcp-server-locabriques");
        assert!(info.instructions.is_some());
    }
}
