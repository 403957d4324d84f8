//! Configuration management for the dictionary server.
//!
//! Configuration is assembled from defaults, an optional `.env` file, and
//! `MCP_`-prefixed environment variables. Nothing here is reloaded at runtime.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default endpoint of the free dictionary API (entries are appended as
/// `/{language}/{word}`).
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";

/// Main configuration structure for the dictionary server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Outbound dictionary API configuration.
    pub dictionary: DictionaryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the dictionary API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Base URL of the entries endpoint.
    pub api_base_url: String,

    /// User-Agent header sent with every lookup.
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_DICTIONARY_API_URL.to_string(),
            user_agent: format!("dictionary-mcp-server/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dictionary-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            dictionary: DictionaryConfig::default(),
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
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_DICTIONARY_API_URL`, `MCP_DICTIONARY_USER_AGENT`, plus the
    /// transport variables read by [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_DICTIONARY_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                info!("Dictionary API URL overridden: {}", url);
                config.dictionary.api_base_url = url.to_string();
            }
        }

        if let Ok(user_agent) = std::env::var("MCP_DICTIONARY_USER_AGENT") {
            config.dictionary.user_agent = user_agent;
        }

        config
    }
}
