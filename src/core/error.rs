//! Error types and handling for the dictionary server.
//!
//! Tool failures never reach the client as protocol errors (they are rendered
//! as `Error: ...` text by the tool registry). The errors here cover what can
//! go wrong around the tools: building the server, configuration, and the
//! transport lifecycle.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the dictionary server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error raised while running a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
