//! Random "word of the day" tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::api::{DictionaryApi, Lookup};
use super::common::{DEFAULT_LANGUAGE, parse_params};
use super::definition::{WordDefinitionParams, WordDefinitionTool};
use super::words::Difficulty;
use crate::domains::tools::ToolError;

/// Parameters for the random word tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RandomWordParams {
    /// Difficulty tier (default: medium).
    #[schemars(description = "Difficulty level of the word: easy, medium or hard (default: medium)")]
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// `get_random_word`: pick a word from a tier and define it.
pub struct RandomWordTool;

impl RandomWordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_random_word";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a random word of the day with its full definition. Choose a difficulty level to control how common the word is.";

    /// Pick a word and delegate to the definition lookup (English only).
    #[instrument(skip_all, fields(difficulty = %params.difficulty))]
    pub async fn execute(
        api: &dyn DictionaryApi,
        params: RandomWordParams,
    ) -> Result<Lookup, ToolError> {
        let word = params.difficulty.random_word();
        info!("Picked random word: {}", word);

        WordDefinitionTool::execute(
            api,
            WordDefinitionParams {
                word: word.to_string(),
                language: DEFAULT_LANGUAGE.to_string(),
            },
        )
        .await
    }

    /// Entry point from the tool registry.
    pub async fn call(
        api: &dyn DictionaryApi,
        arguments: Option<JsonObject>,
    ) -> Result<String, ToolError> {
        let params: RandomWordParams = parse_params(arguments)?;
        Ok(Self::execute(api, params).await?.render())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RandomWordParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
