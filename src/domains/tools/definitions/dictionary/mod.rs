//! Dictionary tools backed by the free dictionary API (dictionaryapi.dev).
//!
//! - `definition`: `get_word_definition`, look up one word
//! - `random_word`: `get_random_word`, pick a word from a difficulty tier and look it up
//!
//! Both tools share the same path: validate, one GET through [`DictionaryApi`],
//! keep the first entry, format it as text.

pub mod api;
pub mod common;
pub mod definition;
pub mod entry;
pub mod format;
pub mod random_word;
pub mod words;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiReply, DictionaryApi, HttpDictionary, Lookup, lookup};
pub use definition::{WordDefinitionParams, WordDefinitionTool};
pub use entry::{Definition, DictionaryEntry, Meaning, Phonetic};
pub use random_word::{RandomWordParams, RandomWordTool};
pub use words::Difficulty;
