use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::Result;
use crate::fetcher::Fetcher;

/// Convention paths for each source, relative to the source location.
///
/// Templates may use `{book}` (the book identifier as given) and
/// `{book_lower}` (lowercased).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLayout {
    /// Shared Spanish markup file holding every book.
    pub spanish_markup: String,
    /// Per-book Hebrew markup.
    pub hebrew_markup: String,
    /// Per-book structured JSON.
    pub structured_json: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            spanish_markup: "spavbl_usfx.xml".to_string(),
            hebrew_markup: "hebrew/{book}.xml".to_string(),
            structured_json: "{book_lower}.json".to_string(),
        }
    }
}

impl SourceLayout {
    pub fn hebrew_path(&self, book_id: &str) -> String {
        expand(&self.hebrew_markup, book_id)
    }

    pub fn structured_path(&self, book_id: &str) -> String {
        expand(&self.structured_json, book_id)
    }
}

fn expand(template: &str, book_id: &str) -> String {
    template
        .replace("{book_lower}", &book_id.to_lowercase())
        .replace("{book}", book_id)
}

/// Fetches the three raw sources by convention path.
#[derive(Clone)]
pub struct SourceReader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    layout: SourceLayout,
}

impl SourceReader {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, layout: SourceLayout) -> Self {
        Self { fetcher, layout }
    }

    pub async fn spanish_markup(&self) -> Result<Vec<u8>> {
        self.fetcher.fetch(&self.layout.spanish_markup).await
    }

    pub async fn hebrew_markup(&self, book_id: &str) -> Result<Vec<u8>> {
        self.fetcher.fetch(&self.layout.hebrew_path(book_id)).await
    }

    pub async fn structured_json(&self, book_id: &str) -> Result<Vec<u8>> {
        self.fetcher.fetch(&self.layout.structured_path(book_id)).await
    }
}
