//! Test doubles and fixtures for the dictionary tools.

use std::sync::Mutex;

use async_trait::async_trait;

use super::api::{ApiReply, DictionaryApi};
use super::entry::DictionaryEntry;
use crate::domains::tools::ToolError;

/// Response body for `GET /entries/en/hello`, trimmed to what the tools read
/// plus a few fields they must ignore.
pub const HELLO_JSON: &str = r#"[
  {
    "word": "hello",
    "phonetic": "həˈləʊ",
    "phonetics": [
      { "text": "həˈləʊ", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-uk.mp3" },
      { "text": "hɛˈləʊ", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-us.mp3" }
    ],
    "origin": "early 19th century: variant of earlier hollo; related to holla.",
    "meanings": [
      {
        "partOfSpeech": "exclamation",
        "definitions": [
          {
            "definition": "used as a greeting or to begin a phone conversation.",
            "example": "hello there, Katie!",
            "synonyms": ["greetings", "howdy"],
            "antonyms": ["bye", "goodbye"]
          }
        ]
      },
      {
        "partOfSpeech": "noun",
        "definitions": [
          {
            "definition": "an utterance of ‘hello’; a greeting.",
            "example": "she was getting polite nods and hellos from people",
            "synonyms": [],
            "antonyms": []
          }
        ]
      },
      {
        "partOfSpeech": "verb",
        "definitions": [
          {
            "definition": "say or shout ‘hello’.",
            "example": "I pressed the phone button and helloed",
            "synonyms": [],
            "antonyms": []
          }
        ]
      }
    ],
    "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
  },
  {
    "word": "hello",
    "phonetics": [],
    "meanings": [
      {
        "partOfSpeech": "noun",
        "definitions": [{ "definition": "A second sense cluster that must not be shown.", "synonyms": [], "antonyms": [] }]
      }
    ]
  }
]"#;

pub fn hello_entries() -> Vec<DictionaryEntry> {
    serde_json::from_str(HELLO_JSON).expect("fixture is valid JSON")
}

/// What the stub should answer with.
#[derive(Debug, Clone)]
pub enum StubReply {
    Entries(Vec<DictionaryEntry>),
    NotFound,
    Status(u16, &'static str),
    FetchFailure(&'static str),
}

/// In-memory [`DictionaryApi`] that records every request it receives.
pub struct StubDictionary {
    reply: StubReply,
    requests: Mutex<Vec<(String, String)>>,
}

impl StubDictionary {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn hello() -> Self {
        Self::new(StubReply::Entries(hello_entries()))
    }

    /// `(language, word)` pairs in request order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct StubFailure(&'static str);

#[async_trait]
impl DictionaryApi for StubDictionary {
    async fn fetch_entries(&self, language: &str, word: &str) -> Result<ApiReply, ToolError> {
        self.requests
            .lock()
            .unwrap()
            .push((language.to_string(), word.to_string()));

        match &self.reply {
            StubReply::Entries(entries) => Ok(ApiReply::Entries(entries.clone())),
            StubReply::NotFound => Ok(ApiReply::NotFound),
            StubReply::Status(status, text) => Err(ToolError::dictionary_api(*status, *text)),
            StubReply::FetchFailure(cause) => Err(ToolError::fetch(word, &StubFailure(*cause))),
        }
    }
}
