//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support via dotenvy) or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default origin of the LocaBriques REST API.
pub const DEFAULT_BASE_URL: &str = "https://locabriques.fr";

/// User-Agent sent on every upstream request.
pub const USER_AGENT: &str = "LocaBriques-MCP/1.0.0";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream LocaBriques API configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream LocaBriques API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base origin of the API, without a trailing slash.
    pub base_url: String,

    /// Optional API token. When present, every request carries
    /// `Authorization: Token <value>`.
    pub token: Option<String>,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-server-locabriques".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `LOCABRIQUES_API_TOKEN`, `LOCABRIQUES_BASE_URL`,
    /// `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("LOCABRIQUES_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(token) = std::env::var("LOCABRIQUES_API_TOKEN") {
            config.api.token = Some(token);
            info!("LocaBriques API token loaded from environment");
        } else {
            warn!(
                "LOCABRIQUES_API_TOKEN not set - authenticated tools \
                 (my_shop, my inventories, my account) will be rejected upstream"
            );
        }

        config
    }
}
