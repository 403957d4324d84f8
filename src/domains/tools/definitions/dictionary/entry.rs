//! Dictionary API response entities.
//!
//! These mirror the JSON returned by `GET /entries/{language}/{word}`: an
//! array of entries, one per sense cluster. Fields the tools never show
//! (`license`, `sourceUrls`, meaning-level synonyms) are ignored.

use serde::{Deserialize, Deserializer};

/// One sense cluster for a word.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meanings: Vec<Meaning>,
}

/// A written pronunciation and/or a recording of it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub antonyms: Vec<String>,
}

/// Treat an explicit `null` list the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_entry() {
        let json = r#"{
            "word": "serendipity",
            "phonetic": "/ˌsɛɹ.ən.ˈdɪp.ɪ.ti/",
            "phonetics": [{"text": "/ˌsɛɹ.ən.ˈdɪp.ɪ.ti/", "audio": "", "sourceUrl": "x"}],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{"definition": "A combination of events.", "synonyms": [], "antonyms": []}],
                "synonyms": ["chance"],
                "antonyms": []
            }],
            "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
            "sourceUrls": ["https://en.wiktionary.org/wiki/serendipity"]
        }"#;

        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "serendipity");
        assert_eq!(entry.origin, None);
        assert_eq!(entry.phonetics[0].audio.as_deref(), Some(""));
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.meanings[0].definitions[0].example, None);
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word": "balance", "meanings": [{"partOfSpeech": "verb"}]}"#)
                .unwrap();
        assert!(entry.phonetics.is_empty());
        assert!(entry.meanings[0].definitions.is_empty());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let json = r#"{
            "word": "hope",
            "phonetic": null,
            "phonetics": null,
            "origin": null,
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{"definition": "A wish.", "example": null, "synonyms": null, "antonyms": null}]
            }, {
                "partOfSpeech": "verb",
                "definitions": null
            }]
        }"#;

        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.phonetics.is_empty());
        assert!(entry.meanings[0].definitions[0].synonyms.is_empty());
        assert!(entry.meanings[0].definitions[0].antonyms.is_empty());
        assert!(entry.meanings[1].definitions.is_empty());

        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word": "hope", "meanings": null}"#).unwrap();
        assert!(entry.meanings.is_empty());
    }
}
