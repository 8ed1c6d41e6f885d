use std::collections::BTreeMap;

use crate::domain::catalog;
use crate::parser::leading_number;
use crate::parser::markup::{Document, Element, Node, SiblingRef};

/// Verse-start marker; carries `bcv="BOOK.CHAPTER.VERSE"`.
const VERSE_START: &str = "v";
/// Explicit verse-end marker.
const VERSE_END: &str = "ve";
/// Footnote and cross-reference subtrees never reach the verse text.
const FOOTNOTE_TAGS: &[&str] = &["f", "x"];

/// A Spanish word token with its lexicon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanishWord {
    pub text: String,
    pub lexicon_ref: Option<String>,
}

/// Everything the Spanish source says about one verse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanishVerse {
    pub words: Vec<SpanishWord>,
    pub full_text: String,
}

/// Spanish verses of one book keyed by chapter, then verse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanishBook {
    pub chapters: BTreeMap<u32, BTreeMap<u32, SpanishVerse>>,
}

impl SpanishBook {
    pub fn verse(&self, chapter: u32, verse: u32) -> Option<&SpanishVerse> {
        self.chapters.get(&chapter).and_then(|c| c.get(&verse))
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

/// Extract one book's words and verse texts from the shared Spanish markup.
///
/// Verses are not nested in the markup: a verse runs from its `v` marker to
/// the next `v` or `ve` sibling.
pub fn parse_spanish_markup(doc: &Document, book_id: &str) -> SpanishBook {
    let code = catalog::markup_code(book_id);
    let prefix = format!("{}.", code);
    let mut book = SpanishBook::default();

    let markers = doc.find_with_siblings(|e| {
        e.is(VERSE_START) && e.attr("bcv").is_some_and(|bcv| bcv.starts_with(&prefix))
    });

    for marker in markers {
        let Some((chapter, verse)) = marker.element().attr("bcv").and_then(parse_bcv) else {
            continue;
        };

        book.chapters
            .entry(chapter)
            .or_default()
            .insert(verse, scan_verse(marker));
    }

    if book.is_empty() {
        tracing::error!("No chapters found for {} ({}) in the Spanish markup", book_id, code);
    } else {
        tracing::info!(
            "Spanish markup: {} chapters, {} verses for {} ({})",
            book.chapters.len(),
            book.verse_count(),
            book_id,
            code
        );
    }

    book
}

/// Split `BOOK.CHAPTER.VERSE` into chapter and verse numbers.
fn parse_bcv(bcv: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = bcv.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    Some((leading_number(parts[1])?, leading_number(parts[2])?))
}

fn is_boundary(element: &Element) -> bool {
    element.is_ignore_case(VERSE_START) || element.is_ignore_case(VERSE_END)
}

fn is_footnote(element: &Element) -> bool {
    FOOTNOTE_TAGS.iter().any(|tag| element.is_ignore_case(tag))
}

/// Walk the siblings after a verse marker, collecting word tokens and text.
fn scan_verse(marker: SiblingRef<'_>) -> SpanishVerse {
    let mut words = Vec::new();
    let mut buffer = String::new();

    for node in marker.following() {
        match node {
            Node::Element(e) if is_boundary(e) => break,
            Node::Element(e) if is_footnote(e) => continue,
            Node::Element(e) => {
                let text = e.text_content_excluding(is_footnote);
                if e.is_ignore_case("w") {
                    words.push(SpanishWord {
                        text: text.trim().to_string(),
                        lexicon_ref: e.attr("s").filter(|s| !s.is_empty()).map(str::to_string),
                    });
                }
                push_segment(&mut buffer, &text);
            }
            Node::Text(t) => push_segment(&mut buffer, t),
        }
    }

    SpanishVerse {
        words,
        full_text: collapse_whitespace(&buffer),
    }
}

fn push_segment(buffer: &mut String, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        buffer.push_str(text);
        buffer.push(' ');
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
