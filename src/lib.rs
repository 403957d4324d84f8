//! Dictionary MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing two tools backed by the
//! free dictionary API at <https://dictionaryapi.dev>:
//!
//! - `get_word_definition`: definition, pronunciation, origin, examples,
//!   synonyms, antonyms and audio links for a word
//! - `get_random_word`: a random word of the day from an easy, medium or hard list
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler and transports
//! - **domains::tools**: tool definitions, the registry, and tool errors
//!
//! # Example
//!
//! ```rust,no_run
//! use dictionary_mcp_server::core::{Config, DictionaryServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = DictionaryServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, DictionaryServer, Error, Result};
