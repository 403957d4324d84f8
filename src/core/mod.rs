//! Core infrastructure: configuration, errors, the MCP handler, transports.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::DictionaryServer;
pub use transport::{TransportConfig, TransportService};
