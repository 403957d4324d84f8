//! Tool definitions module.
//!
//! Each tool lives in its own file under its API's directory.

pub mod dictionary;

pub use dictionary::{RandomWordTool, WordDefinitionTool};
