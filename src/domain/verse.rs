use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Word;

/// Full-text literal used when neither the Spanish source nor the glosses yield a sentence.
pub const FULL_TEXT_UNAVAILABLE: &str = "Traducción completa no disponible.";

/// Words in source order plus the reconstructed Spanish sentence.
///
/// Word order is the Hebrew token order; renderers lay it out right-to-left
/// without reversing the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub words: Vec<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl Verse {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            full_text: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn has_full_text(&self) -> bool {
        self.full_text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Verses of one chapter keyed by verse number. Numbering may have gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chapter {
    pub verses: BTreeMap<u32, Verse>,
}

impl Chapter {
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.get(&number)
    }

    pub fn first_verse(&self) -> Option<&Verse> {
        self.verses.values().next()
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Chapters of one book keyed by chapter number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book {
    pub chapters: BTreeMap<u32, Chapter>,
}

impl Book {
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(&number)
    }

    pub fn verse(&self, chapter: u32, verse: u32) -> Option<&Verse> {
        self.chapter(chapter).and_then(|c| c.verse(verse))
    }

    pub fn verse_mut(&mut self, chapter: u32, verse: u32) -> &mut Verse {
        self.chapters
            .entry(chapter)
            .or_default()
            .verses
            .entry(verse)
            .or_default()
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(Chapter::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// A book is complete once its first chapter's first verse carries a full text.
    pub fn is_complete(&self) -> bool {
        self.chapters
            .values()
            .next()
            .and_then(Chapter::first_verse)
            .is_some_and(Verse::has_full_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse_with_text(text: &str) -> Verse {
        Verse {
            words: vec![Word::hebrew("אֱלֹהִים")],
            full_text: Some(text.into()),
        }
    }

    #[test]
    fn test_empty_book_is_not_complete() {
        assert!(!Book::default().is_complete());
    }

    #[test]
    fn test_book_complete_when_first_verse_has_text() {
        let mut book = Book::default();
        *book.verse_mut(1, 1) = verse_with_text("En el principio");
        assert!(book.is_complete());
    }

    #[test]
    fn test_book_incomplete_when_first_verse_text_empty() {
        let mut book = Book::default();
        *book.verse_mut(1, 1) = verse_with_text("");
        *book.verse_mut(1, 2) = verse_with_text("Y la tierra");
        assert!(!book.is_complete());
    }

    #[test]
    fn test_completeness_uses_lowest_numbers() {
        let mut book = Book::default();
        *book.verse_mut(2, 1) = verse_with_text("");
        *book.verse_mut(1, 3) = verse_with_text("texto");
        assert!(book.is_complete());
    }

    #[test]
    fn test_verse_gaps_are_tolerated() {
        let mut book = Book::default();
        book.verse_mut(1, 1);
        book.verse_mut(1, 4);

        let chapter = book.chapter(1).unwrap();
        assert_eq!(chapter.verses.keys().copied().collect::<Vec<_>>(), vec![1, 4]);
        assert!(book.verse(1, 2).is_none());
        assert_eq!(book.verse_count(), 2);
    }

    #[test]
    fn test_chapters_serialize_in_numeric_order() {
        let mut book = Book::default();
        book.verse_mut(10, 1);
        book.verse_mut(2, 1);

        let json = serde_json::to_string(&book).unwrap();
        assert!(json.find("\"2\"").unwrap() < json.find("\"10\"").unwrap());
    }
}
