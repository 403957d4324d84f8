//! Word definition lookup tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::api::{DictionaryApi, Lookup, lookup};
use super::common::{default_language, parse_params};
use crate::domains::tools::ToolError;

/// Parameters for the definition lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WordDefinitionParams {
    /// The word to look up.
    #[schemars(description = "The word to look up", length(min = 1))]
    pub word: String,

    /// Dictionary language code (default: en).
    #[schemars(description = "Language code for the dictionary (default: en)")]
    #[serde(default = "default_language")]
    pub language: String,
}

impl WordDefinitionParams {
    /// Trim both fields and reject empty values.
    pub fn validate(self) -> Result<Self, ToolError> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(ToolError::invalid_arguments("Word must not be empty"));
        }

        let language = self.language.trim();
        if language.is_empty() {
            return Err(ToolError::invalid_arguments(
                "Language code must not be empty",
            ));
        }

        Ok(Self {
            word: word.to_string(),
            language: language.to_string(),
        })
    }
}

/// `get_word_definition`: look a word up and format its first entry.
pub struct WordDefinitionTool;

impl WordDefinitionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_word_definition";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the definition of a word, including pronunciation, origin, meanings by part of speech, examples, synonyms, antonyms and audio pronunciation links.";

    /// Validate and run a lookup.
    #[instrument(skip_all, fields(word = %params.word, language = %params.language))]
    pub async fn execute(
        api: &dyn DictionaryApi,
        params: WordDefinitionParams,
    ) -> Result<Lookup, ToolError> {
        let params = params.validate()?;
        info!("Looking up definition");
        lookup(api, &params.word, &params.language).await
    }

    /// Entry point from the tool registry.
    pub async fn call(
        api: &dyn DictionaryApi,
        arguments: Option<JsonObject>,
    ) -> Result<String, ToolError> {
        let params: WordDefinitionParams = parse_params(arguments)?;
        Ok(Self::execute(api, params).await?.render())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WordDefinitionParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
