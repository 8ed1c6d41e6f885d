use std::fmt::Write;

use crate::app::{AppContext, InterlinealError, Result};
use crate::domain::{catalog, Verse};

const NO_VERSE_DATA: &str = "No hay datos disponibles para este versículo";

pub fn list_books() {
    for book in catalog::books() {
        println!(
            "{:<14} {:<16} {:>3} capítulos",
            book.id, book.display_name, book.chapter_count
        );
    }
}

pub async fn show(
    ctx: &AppContext,
    book_id: &str,
    chapter: u32,
    verse: Option<u32>,
    json: bool,
) -> Result<()> {
    let info = catalog::find(book_id);
    if info.is_none() {
        tracing::warn!("{} is not in the catalog; trying the sources anyway", book_id);
    }
    if let Some(info) = info {
        if chapter == 0 || chapter > info.chapter_count {
            return Err(InterlinealError::Other(format!(
                "{} has chapters 1-{}",
                info.display_name, info.chapter_count
            )));
        }
    }

    let book = ctx.loader.load_book(book_id).await?;
    let title = info.map_or(book_id, |b| b.display_name);

    let Some(chapter_data) = book.chapter(chapter) else {
        println!("{} {}: capítulo no encontrado", title, chapter);
        return Ok(());
    };

    let verses: Vec<(u32, &Verse)> = match verse {
        Some(v) => match chapter_data.verse(v) {
            Some(data) => vec![(v, data)],
            None => {
                println!("{} {}:{}: versículo no encontrado", title, chapter, v);
                return Ok(());
            }
        },
        None => chapter_data.verses.iter().map(|(n, v)| (*n, v)).collect(),
    };

    if json {
        let map: std::collections::BTreeMap<u32, &Verse> = verses.into_iter().collect();
        let out = serde_json::to_string_pretty(&map)?;
        println!("{}", out);
        return Ok(());
    }

    for (number, data) in verses {
        println!("{} {}:{}", title, chapter, number);
        print!("{}", render_verse(data));
        println!();
    }

    Ok(())
}

/// Plain-text interlinear rendering: one Hebrew/Spanish pair per line, then
/// the full sentence.
pub fn render_verse(verse: &Verse) -> String {
    let mut out = String::new();

    if verse.is_empty() {
        let _ = writeln!(out, "  {}", NO_VERSE_DATA);
    }

    for word in &verse.words {
        let _ = write!(out, "  {}  {}", word.original, word.translation);
        if let Some(strong) = &word.lexicon_ref {
            let _ = write!(out, "  [{}]", strong);
        }
        if let Some(morph) = &word.morphology {
            let _ = write!(out, "  ({})", morph);
        }
        out.push('\n');
    }

    if let Some(text) = verse.full_text.as_deref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "  {}", text);
    }

    out
}
