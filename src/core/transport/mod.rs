//! Transport layer for the dictionary server.
//!
//! - **STDIO**: standard input/output, what MCP hosts use (feature `stdio`, default)
//! - **TCP**: line-delimited JSON-RPC over raw sockets (feature `tcp`)
//!
//! Transports only move protocol messages; every request ends up in the
//! same [`DictionaryServer`] handler.

mod config;
mod error;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

use tracing::info;

use crate::core::DictionaryServer;

#[cfg(feature = "stdio")]
use stdio::StdioTransport;

#[cfg(feature = "tcp")]
use tcp::TcpTransport;

/// Runs the configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve `server` until the transport shuts down.
    pub async fn run(self, server: DictionaryServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(server).await,
        }
    }
}
