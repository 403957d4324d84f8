//! Helpers shared by the dictionary tools.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Language used when the caller does not pass one.
pub const DEFAULT_LANGUAGE: &str = "en";

pub fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Deserialize tool arguments, turning serde failures into validation errors.
pub fn parse_params<P: DeserializeOwned>(
    arguments: Option<JsonObject>,
) -> Result<P, ToolError> {
    let arguments = serde_json::Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render a tool failure as ordinary text content.
///
/// The protocol-level call still succeeds; clients see `Error: ...` as the body.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!("{}", error);
    success_result(format!("Error: {}", error))
}
