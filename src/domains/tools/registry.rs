//! Tool Registry - central registration and dispatch for all tools.
//!
//! This is the dispatch boundary: whatever happens inside a tool, the caller
//! gets back a successful [`CallToolResult`] with a single text item.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument};

use super::ToolError;
use super::definitions::dictionary::DictionaryApi;
use super::definitions::dictionary::common::{error_result, success_result};
use super::definitions::{RandomWordTool, WordDefinitionTool};

/// Tool registry - lists and dispatches all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    api: Arc<dyn DictionaryApi>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `api`.
    pub fn new(api: Arc<dyn DictionaryApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![WordDefinitionTool::NAME, RandomWordTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![WordDefinitionTool::to_tool(), RandomWordTool::to_tool()]
    }

    /// Run the tool called `name`.
    ///
    /// Never fails at the protocol level: errors become `Error: {message}` text.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool call: {}", name);

        let outcome = match name {
            WordDefinitionTool::NAME => WordDefinitionTool::call(self.api.as_ref(), arguments).await,
            RandomWordTool::NAME => RandomWordTool::call(self.api.as_ref(), arguments).await,
            _ => Err(ToolError::unknown_tool(name)),
        };

        match outcome {
            Ok(text) => success_result(text),
            Err(e) => error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::definitions::dictionary::testing::{StubDictionary, StubReply};
    use super::*;
    use rmcp::model::RawContent;

    fn registry(stub: &Arc<StubDictionary>) -> ToolRegistry {
        ToolRegistry::new(stub.clone())
    }

    fn text_of(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        assert_ne!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn args(json: serde_json::Value) -> Option<JsonObject> {
        json.as_object().cloned()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = registry(&Arc::new(StubDictionary::hello()));
        assert_eq!(
            registry.tool_names(),
            vec!["get_word_definition", "get_random_word"]
        );
    }

    #[test]
    fn test_tools_match_names() {
        let registry = registry(&Arc::new(StubDictionary::hello()));
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_text_without_request() {
        let stub = Arc::new(StubDictionary::hello());
        let result = registry(&stub).call_tool("translate", None).await;

        assert_eq!(text_of(&result), "Error: Unknown tool: translate");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_is_text() {
        let stub = Arc::new(StubDictionary::hello());
        let result = registry(&stub)
            .call_tool(WordDefinitionTool::NAME, args(serde_json::json!({ "word": "" })))
            .await;

        assert_eq!(text_of(&result), "Error: Word must not be empty");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_is_plain_text() {
        let stub = Arc::new(StubDictionary::new(StubReply::NotFound));
        let result = registry(&stub)
            .call_tool(WordDefinitionTool::NAME, args(serde_json::json!({ "word": "qwzx" })))
            .await;

        let text = text_of(&result);
        assert!(text.starts_with("No definition found for \"qwzx\""));
        assert!(!text.starts_with("Error:"));
    }

    #[tokio::test]
    async fn test_api_status_error_is_text() {
        let stub = Arc::new(StubDictionary::new(StubReply::Status(429, "Too Many Requests")));
        let result = registry(&stub)
            .call_tool(WordDefinitionTool::NAME, args(serde_json::json!({ "word": "hope" })))
            .await;

        assert_eq!(
            text_of(&result),
            "Error: Dictionary API error: 429 Too Many Requests"
        );
    }

    #[tokio::test]
    async fn test_fetch_error_is_text() {
        let stub = Arc::new(StubDictionary::new(StubReply::FetchFailure("dns error")));
        let result = registry(&stub)
            .call_tool(WordDefinitionTool::NAME, args(serde_json::json!({ "word": "hope" })))
            .await;

        assert_eq!(
            text_of(&result),
            "Error: Failed to fetch definition for \"hope\": dns error"
        );
    }

    #[tokio::test]
    async fn test_hello_round_trip() {
        let stub = Arc::new(StubDictionary::hello());
        let result = registry(&stub)
            .call_tool(WordDefinitionTool::NAME, args(serde_json::json!({ "word": "hello" })))
            .await;

        let text = text_of(&result);
        assert_eq!(text.lines().next(), Some("**hello**"));
        assert!(text.ends_with("hello-us.mp3\n"));
        assert_eq!(stub.requests(), vec![("en".to_string(), "hello".to_string())]);
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let stub = Arc::new(StubDictionary::hello());
        let registry = registry(&stub);

        let calls = (0..8).map(|_| registry.call_tool(RandomWordTool::NAME, None));
        let results = futures::future::join_all(calls).await;

        assert_eq!(results.len(), 8);
        for result in &results {
            assert!(text_of(result).starts_with("**hello**"));
        }
        assert_eq!(stub.requests().len(), 8);
    }
}
