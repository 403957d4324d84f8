//! Dictionary API client.
//!
//! [`DictionaryApi`] is the only place the tools touch the network. The
//! production implementation is [`HttpDictionary`] (one `reqwest` GET per
//! lookup, no retry, no timeout beyond the client defaults); tests swap in
//! an in-memory double.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, instrument};

use super::entry::DictionaryEntry;
use super::format::{format_entry, not_found_message};
use crate::core::config::DictionaryConfig;
use crate::core::{Error, Result};
use crate::domains::tools::ToolError;

/// Raw outcome of an entries request that reached the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// 2xx with a decoded body (possibly an empty array).
    Entries(Vec<DictionaryEntry>),
    /// HTTP 404.
    NotFound,
}

/// Source of dictionary entries.
#[async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Fetch all entries for `word` in `language`.
    ///
    /// Non-2xx statuses other than 404 map to [`ToolError::DictionaryApi`];
    /// transport and decode failures map to [`ToolError::Fetch`].
    async fn fetch_entries(
        &self,
        language: &str,
        word: &str,
    ) -> std::result::Result<ApiReply, ToolError>;
}

/// `reqwest`-backed client for `api.dictionaryapi.dev` (or a compatible mirror).
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDictionary {
    /// Build a client from configuration.
    pub fn new(config: &DictionaryConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            Error::config(format!(
                "Invalid dictionary API URL '{}': {}",
                config.api_base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Dictionary API URL '{}' cannot have path segments appended",
                config.api_base_url
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// URL of the entries resource, with `language` and `word` percent-encoded
    /// as individual path segments.
    pub fn entry_url(&self, language: &str, word: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(language).push(word);
        }
        url
    }
}

#[async_trait]
impl DictionaryApi for HttpDictionary {
    #[instrument(skip(self))]
    async fn fetch_entries(
        &self,
        language: &str,
        word: &str,
    ) -> std::result::Result<ApiReply, ToolError> {
        let url = self.entry_url(language, word);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ToolError::fetch(word, &e))?;

        let status = response.status();
        debug!("Dictionary API responded with {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(ApiReply::NotFound);
        }

        if !status.is_success() {
            return Err(ToolError::dictionary_api(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let entries = response
            .json::<Vec<DictionaryEntry>>()
            .await
            .map_err(|e| ToolError::fetch(word, &e))?;

        Ok(ApiReply::Entries(entries))
    }
}

/// Result of a lookup that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The first entry the API returned.
    Found(DictionaryEntry),
    /// The API knows nothing about `word`.
    NotFound { word: String },
}

impl Lookup {
    /// Text shown to the client.
    pub fn render(&self) -> String {
        match self {
            Self::Found(entry) => format_entry(entry),
            Self::NotFound { word } => not_found_message(word),
        }
    }
}

/// Look up `word` and keep only the first entry.
///
/// A 404 and an empty entry list are the same thing to the caller.
pub async fn lookup(
    api: &dyn DictionaryApi,
    word: &str,
    language: &str,
) -> std::result::Result<Lookup, ToolError> {
    let entries = match api.fetch_entries(language, word).await? {
        ApiReply::Entries(entries) => entries,
        ApiReply::NotFound => Vec::new(),
    };

    Ok(match entries.into_iter().next() {
        Some(entry) => Lookup::Found(entry),
        None => Lookup::NotFound {
            word: word.to_string(),
        },
    })
}
