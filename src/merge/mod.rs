//! Positional alignment of Hebrew words with Spanish glosses.
//!
//! Alignment is by index only. Surplus Spanish words are folded into the last
//! aligned gloss so no Spanish text is lost, and the result always has exactly
//! one word per Hebrew token.

use crate::domain::{Book, Verse, Word, FULL_TEXT_UNAVAILABLE, PLACEHOLDER_TRANSLATION};
use crate::parser::spanish::collapse_whitespace;
use crate::parser::{SpanishBook, SpanishVerse};

/// Pair each Hebrew word with the Spanish word at the same position.
///
/// With no Hebrew words the result is empty whatever the Spanish side holds.
pub fn align_verse(hebrew: &[Word], spanish: Option<&SpanishVerse>) -> Verse {
    let spanish_words = spanish.map(|s| s.words.as_slice()).unwrap_or_default();

    let mut words: Vec<Word> = hebrew
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let counterpart = spanish_words.get(i);
            Word {
                original: h.original.clone(),
                translation: counterpart
                    .map(|s| s.text.as_str())
                    .filter(|t| !t.is_empty())
                    .unwrap_or(PLACEHOLDER_TRANSLATION)
                    .to_string(),
                lexicon_ref: counterpart
                    .and_then(|s| s.lexicon_ref.clone())
                    .or_else(|| h.lexicon_ref.clone()),
                morphology: h.morphology.clone(),
            }
        })
        .collect();

    if spanish_words.len() > hebrew.len() {
        if let Some(last) = words.last_mut() {
            let overflow = spanish_words[hebrew.len()..]
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let overflow = overflow.trim();
            if !overflow.is_empty() {
                last.translation.push(' ');
                last.translation.push_str(overflow);
            }
        }
    }

    let full_text = resolve_full_text(&words, spanish);
    Verse {
        words,
        full_text: Some(full_text),
    }
}

/// Spanish full text if present, else the joined glosses without
/// placeholders, else the unavailable literal.
pub fn resolve_full_text(words: &[Word], spanish: Option<&SpanishVerse>) -> String {
    if let Some(text) = spanish.map(|s| s.full_text.trim()).filter(|t| !t.is_empty()) {
        return text.to_string();
    }

    let joined = words
        .iter()
        .filter(|w| w.has_translation())
        .map(|w| w.translation.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let joined = collapse_whitespace(&joined.replace(PLACEHOLDER_TRANSLATION, " "));

    if joined.is_empty() {
        FULL_TEXT_UNAVAILABLE.to_string()
    } else {
        joined
    }
}

/// Align every verse of a Hebrew-markup book against the Spanish source.
///
/// The Hebrew side decides which chapters and verses exist.
pub fn merge_book(hebrew: Book, spanish: &SpanishBook) -> Book {
    let mut merged = Book::default();

    for (chapter_num, chapter) in hebrew.chapters {
        let entry = merged.chapters.entry(chapter_num).or_default();
        for (verse_num, verse) in chapter.verses {
            let aligned = align_verse(&verse.words, spanish.verse(chapter_num, verse_num));
            entry.verses.insert(verse_num, aligned);
        }
    }

    merged
}

/// Fill in full texts for a book whose words already carry glosses.
pub fn attach_full_text(mut book: Book, spanish: &SpanishBook) -> Book {
    for (chapter_num, chapter) in book.chapters.iter_mut() {
        for (verse_num, verse) in chapter.verses.iter_mut() {
            let full_text = resolve_full_text(&verse.words, spanish.verse(*chapter_num, *verse_num));
            verse.full_text = Some(full_text);
        }
    }
    book
}
