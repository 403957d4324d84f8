//! Markdown-ish text rendering of a dictionary entry.

use std::fmt::Write;

use super::entry::{Definition, DictionaryEntry};

/// Text returned when the API has nothing for `word` (404 or an empty array).
pub fn not_found_message(word: &str) -> String {
    format!(
        "No definition found for \"{}\". Please check the spelling or try a different word.",
        word
    )
}

/// Pronunciation to display: the top-level `phonetic` if present, otherwise
/// every non-empty `phonetics[].text` joined with `", "`.
pub fn pronunciation(entry: &DictionaryEntry) -> Option<String> {
    if let Some(phonetic) = entry.phonetic.as_deref().filter(|p| !p.is_empty()) {
        return Some(phonetic.to_string());
    }

    let joined = entry
        .phonetics
        .iter()
        .filter_map(|p| p.text.as_deref())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    (!joined.is_empty()).then_some(joined)
}

/// Every non-empty audio URL, in order.
pub fn audio_urls(entry: &DictionaryEntry) -> Vec<&str> {
    entry
        .phonetics
        .iter()
        .filter_map(|p| p.audio.as_deref())
        .filter(|audio| !audio.is_empty())
        .collect()
}

/// Render a single entry.
pub fn format_entry(entry: &DictionaryEntry) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(out, "**{}**\n\n", entry.word);

    if let Some(pronunciation) = pronunciation(entry) {
        let _ = write!(out, "**Pronunciation:** {}\n\n", pronunciation);
    }

    if let Some(origin) = entry.origin.as_deref().filter(|o| !o.is_empty()) {
        let _ = write!(out, "**Origin:** {}\n\n", origin);
    }

    out.push_str("**Meanings:**\n\n");
    for (i, meaning) in entry.meanings.iter().enumerate() {
        let _ = writeln!(out, "{}. *{}*", i + 1, meaning.part_of_speech);
        for (j, definition) in meaning.definitions.iter().enumerate() {
            write_definition(&mut out, i + 1, j + 1, definition);
        }
        out.push('\n');
    }

    let audio = audio_urls(entry);
    if !audio.is_empty() {
        out.push_str("**Audio Pronunciation:**\n");
        for (k, url) in audio.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", k + 1, url);
        }
    }

    out
}

fn write_definition(out: &mut String, meaning_no: usize, definition_no: usize, def: &Definition) {
    let _ = writeln!(out, "   {}.{}. {}", meaning_no, definition_no, def.definition);

    if let Some(example) = def.example.as_deref().filter(|e| !e.is_empty()) {
        let _ = writeln!(out, "      Example: \"{}\"", example);
    }
    if !def.synonyms.is_empty() {
        let _ = writeln!(out, "      Synonyms: {}", def.synonyms.join(", "));
    }
    if !def.antonyms.is_empty() {
        let _ = writeln!(out, "      Antonyms: {}", def.antonyms.join(", "));
    }
}
