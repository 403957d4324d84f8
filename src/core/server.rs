//! MCP server handler.
//!
//! `list_tools` and `call_tool` are implemented by hand instead of through a
//! `ToolRouter`: an unknown tool name has to come back as an ordinary text
//! result, and the router would answer it with a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::ToolRegistry;
use crate::domains::tools::definitions::dictionary::{DictionaryApi, HttpDictionary};

const INSTRUCTIONS: &str = "Dictionary server. Use get_word_definition to look up a word \
(optionally in another language), or get_random_word for a word of the day at easy, medium \
or hard difficulty.";

/// The dictionary MCP server handler.
///
/// Holds no per-call state; clones share the same HTTP client.
#[derive(Clone)]
pub struct DictionaryServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool listing and dispatch.
    tools: ToolRegistry,
}

impl DictionaryServer {
    /// Create a server that talks to the configured dictionary API.
    pub fn new(config: Config) -> Result<Self> {
        let api = HttpDictionary::new(&config.dictionary)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Create a server with a custom dictionary source.
    pub fn with_api(config: Config, api: Arc<dyn DictionaryApi>) -> Self {
        Self {
            config: Arc::new(config),
            tools: ToolRegistry::new(api),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

impl ServerHandler for DictionaryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self
            .tools
            .call_tool(&request.name, request.arguments)
            .await)
    }
}
