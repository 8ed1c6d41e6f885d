use crate::domain::{Book, Verse, Word};
use crate::parser::leading_number;
use crate::parser::markup::{Document, Element};

/// Read `c`/`v`/`w` markup into untranslated Hebrew words.
///
/// Chapter and verse numbers come from the `n` attribute and default to 1
/// when missing or unparseable. Chapters without verses are kept.
pub fn parse_hebrew_markup(doc: &Document) -> Book {
    let mut book = Book::default();

    for chapter in doc.descendants("c") {
        let chapter_num = number_attr(chapter);
        let entry = book.chapters.entry(chapter_num).or_default();

        for verse in chapter.descendants("v") {
            let verse_num = number_attr(verse);
            let words = verse
                .descendants("w")
                .into_iter()
                .map(|w| Word::hebrew(w.text_content().trim()))
                .collect();

            entry.verses.insert(verse_num, Verse::new(words));
        }
    }

    tracing::debug!(
        "Hebrew markup: {} chapters, {} verses",
        book.chapters.len(),
        book.verse_count()
    );

    book
}

fn number_attr(element: &Element) -> u32 {
    element
        .attr("n")
        .and_then(leading_number)
        .unwrap_or(1)
}
