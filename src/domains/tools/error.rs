//! Tool-specific error types.
//!
//! The `Display` text of each variant is exactly what the client reads after
//! the `Error: ` prefix, so keep these messages user-facing.

use thiserror::Error;

/// Errors that can occur while running a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments were missing, malformed, or failed validation.
    #[error("{0}")]
    InvalidArguments(String),

    /// The dictionary API answered with a non-2xx status other than 404.
    #[error("Dictionary API error: {status} {status_text}")]
    DictionaryApi { status: u16, status_text: String },

    /// The request never produced a usable response (network or decode failure).
    #[error("Failed to fetch definition for \"{word}\": {cause}")]
    Fetch { word: String, cause: String },

    /// The requested tool is not advertised by this server.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new dictionary API status error.
    pub fn dictionary_api(status: u16, status_text: impl Into<String>) -> Self {
        Self::DictionaryApi {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a new fetch error, flattening the cause's source chain into text.
    pub fn fetch(word: impl Into<String>, cause: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = cause.to_string();
        let mut source = cause.source();
        while let Some(inner) = source {
            let text = inner.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = inner.source();
        }

        Self::Fetch {
            word: word.into(),
            cause: message,
        }
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }
}
