use serde::Deserialize;
use serde_json::Value;

use crate::app::Result;
use crate::domain::{Book, Word, PLACEHOLDER_TRANSLATION};

/// One verse record of the per-word JSON source.
#[derive(Debug, Deserialize)]
struct VerseRecord {
    chapter: u32,
    verse: u32,
    #[serde(default)]
    words: Value,
}

/// Parse the structured JSON body into glossed words.
///
/// Only a body that is not JSON at all is an error. Records that don't fit the
/// expected shape are logged and skipped; a record whose `words` is not an
/// array still gets an (empty) verse entry.
pub fn parse_structured_json(body: &[u8]) -> Result<Book> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(parse_structured_records(&value))
}

pub fn parse_structured_records(value: &Value) -> Book {
    let mut book = Book::default();

    let Some(records) = value.as_array() else {
        tracing::error!("Structured JSON is not an array of verse records");
        return book;
    };

    for (index, raw) in records.iter().enumerate() {
        let record = match VerseRecord::deserialize(raw) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping structured record #{}: {}", index, e);
                continue;
            }
        };

        let verse = book.verse_mut(record.chapter, record.verse);

        let Some(entries) = record.words.as_array() else {
            tracing::warn!(
                "Invalid data for {}:{} in JSON: 'words' is not an array",
                record.chapter,
                record.verse
            );
            continue;
        };

        verse.words.extend(entries.iter().filter_map(word_from_entry));
    }

    tracing::debug!(
        "Structured JSON: {} chapters, {} verses",
        book.chapters.len(),
        book.verse_count()
    );

    book
}

/// Entries without a Hebrew token have nothing to align against and are dropped.
/// Any other field of the wrong type is treated as absent.
fn word_from_entry(entry: &Value) -> Option<Word> {
    let original = string_field(entry, "hebrew")?;

    Some(Word {
        original,
        translation: string_field(entry, "spanish")
            .unwrap_or_else(|| PLACEHOLDER_TRANSLATION.to_string()),
        lexicon_ref: string_field(entry, "strong"),
        morphology: string_field(entry, "parsing"),
    })
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
