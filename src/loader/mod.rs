//! Per-book acquisition: pick a pipeline, fetch, parse, merge, cache.
//!
//! ```text
//! Spanish markup ─┐
//!                 ├─> merge ─> Store
//! Hebrew markup ──┘  (or structured JSON + full-text injection)
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::app::Result;
use crate::domain::Book;
use crate::fetcher::SourceReader;
use crate::merge::{attach_full_text, merge_book};
use crate::parser::{
    parse_hebrew_markup, parse_spanish_markup, parse_structured_json, Document, SpanishBook,
};
use crate::store::Store;

/// Books shipped with a structured per-word JSON source.
pub const DEFAULT_STRUCTURED_BOOKS: &[&str] = &["Genesis", "Exodus", "Leviticus"];

/// Which source supplies a book's Hebrew words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStrategy {
    /// Per-word JSON with inline glosses; only full texts come from Spanish markup.
    StructuredJson,
    /// Hebrew markup aligned positionally against Spanish markup words.
    HebrewMarkup,
}

/// Lookup from book identifier to [`SourceStrategy`].
#[derive(Debug, Clone)]
pub struct StrategyTable {
    structured: HashSet<String>,
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::new(DEFAULT_STRUCTURED_BOOKS.iter().copied())
    }
}

impl StrategyTable {
    pub fn new<I, T>(structured_books: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            structured: structured_books.into_iter().map(Into::into).collect(),
        }
    }

    pub fn strategy_for(&self, book_id: &str) -> SourceStrategy {
        if self.structured.contains(book_id) {
            SourceStrategy::StructuredJson
        } else {
            SourceStrategy::HebrewMarkup
        }
    }
}

/// Loads books on demand and memoizes complete ones in the store.
///
/// Overlapping loads of the same book are not deduplicated.
pub struct BookLoader<S: Store> {
    sources: SourceReader,
    store: Arc<S>,
    strategies: StrategyTable,
}

impl<S: Store + Send + Sync> BookLoader<S> {
    pub fn new(sources: SourceReader, store: Arc<S>, strategies: StrategyTable) -> Self {
        Self {
            sources,
            store,
            strategies,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn strategies(&self) -> &StrategyTable {
        &self.strategies
    }

    /// Read access for display code; never triggers I/O.
    pub fn cached(&self, book_id: &str) -> Option<Arc<Book>> {
        self.store.get(book_id)
    }

    /// Return the book, from cache when complete, otherwise freshly loaded.
    ///
    /// On failure the cache entry is evicted and the error returned; callers
    /// should show "no data" for the book.
    pub async fn load_book(&self, book_id: &str) -> Result<Arc<Book>> {
        if let Some(book) = self.store.get(book_id) {
            if book.is_complete() {
                tracing::debug!("{} already loaded", book_id);
                return Ok(book);
            }
        }

        tracing::info!("Loading {}", book_id);
        match self.fetch_book(book_id).await {
            Ok(book) => {
                tracing::info!(
                    "Loaded {}: {} chapters, {} verses",
                    book_id,
                    book.chapters.len(),
                    book.verse_count()
                );
                Ok(self.store.put(book_id, book))
            }
            Err(e) => {
                self.store.evict(book_id);
                tracing::error!("Failed to load {}: {}", book_id, e);
                Err(e)
            }
        }
    }

    async fn fetch_book(&self, book_id: &str) -> Result<Book> {
        let spanish = self.fetch_spanish(book_id).await?;

        match self.strategies.strategy_for(book_id) {
            SourceStrategy::StructuredJson => {
                let body = self.sources.structured_json(book_id).await?;
                let book = parse_structured_json(&body)?;
                Ok(attach_full_text(book, &spanish))
            }
            SourceStrategy::HebrewMarkup => {
                let body = self.sources.hebrew_markup(book_id).await?;
                let hebrew = parse_hebrew_markup(&Document::from_bytes(&body));
                Ok(merge_book(hebrew, &spanish))
            }
        }
    }

    /// The shared Spanish file is fetched and parsed again for every book.
    async fn fetch_spanish(&self, book_id: &str) -> Result<SpanishBook> {
        let body = self.sources.spanish_markup().await?;
        let doc = Document::from_bytes(&body);
        Ok(parse_spanish_markup(&doc, book_id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::app::InterlinealError;
    use crate::domain::PLACEHOLDER_TRANSLATION;
    use crate::fetcher::{Fetcher, SourceLayout};
    use crate::store::MemoryStore;

    const SPANISH: &str = r#"<usfx>
<book id="GEN"><p><v bcv="GEN.1.1"/><w s="H7225">En el principio</w> <w s="H1254">creó</w> Dios<ve/></p></book>
<book id="EXO"><p><v bcv="EXO.1.1"/><w s="H428">Estos</w> son<ve/></p></book>
<book id="RUT"><p><v bcv="RUT.1.1"/><w s="H1961">Aconteció</w> <w s="H3117">en los días</w> <w s="H8199">que gobernaban</w> <w>los</w> <w>jueces</w><f>nota</f>.<ve/>
<v bcv="RUT.1.2"/><w s="H8034">El nombre</w><ve/></p></book>
</usfx>"#;

    const RUTH_HEBREW: &str = r#"<book><c n="1">
<v n="1"><w>וַיְהִי</w><w>בִּימֵי</w><w>שְׁפֹט</w></v>
<v n="2"><w>וְשֵׁם</w><w>הָאִישׁ</w><w>אֱלִימֶלֶךְ</w></v>
</c></book>"#;

    const GENESIS_JSON: &str = r#"[
        {"chapter": 1, "verse": 1, "words": [
            {"hebrew": "בְּרֵאשִׁית", "strong": "H7225", "parsing": "HR/Ncfsa", "spanish": "En el principio"},
            {"hebrew": "בָּרָא", "strong": "H1254", "spanish": "creó"}
        ]},
        {"chapter": 1, "verse": 2, "words": [
            {"hebrew": "וְהָאָרֶץ", "spanish": "y la tierra"},
            {"hebrew": "הָיְתָה"}
        ]}
    ]"#;

    /// In-memory fetcher that records every requested path.
    #[derive(Default)]
    struct RecordingFetcher {
        files: Mutex<HashMap<String, Vec<u8>>>,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingFetcher {
        fn with_defaults() -> Self {
            let fetcher = Self::default();
            fetcher.insert("spavbl_usfx.xml", SPANISH);
            fetcher.insert("hebrew/Ruth.xml", RUTH_HEBREW);
            fetcher.insert("genesis.json", GENESIS_JSON);
            fetcher
        }

        fn insert(&self, path: &str, body: &str) {
            self.insert_bytes(path, body.as_bytes().to_vec());
        }

        fn insert_bytes(&self, path: &str, body: Vec<u8>) {
            self.files.lock().unwrap().insert(path.to_string(), body);
        }

        fn remove(&self, path: &str) {
            self.files.lock().unwrap().remove(path);
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for RecordingFetcher {
        async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(path.to_string());
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| InterlinealError::SourceNotFound(path.to_string()))
        }
    }

    fn loader(fetcher: Arc<RecordingFetcher>) -> BookLoader<MemoryStore> {
        let sources = SourceReader::new(fetcher, SourceLayout::default());
        BookLoader::new(sources, Arc::new(MemoryStore::new()), StrategyTable::default())
    }

    #[test]
    fn test_strategy_table() {
        let table = StrategyTable::default();
        assert_eq!(table.strategy_for("Genesis"), SourceStrategy::StructuredJson);
        assert_eq!(table.strategy_for("Leviticus"), SourceStrategy::StructuredJson);
        assert_eq!(table.strategy_for("Ruth"), SourceStrategy::HebrewMarkup);

        let custom = StrategyTable::new(["Ruth"]);
        assert_eq!(custom.strategy_for("Ruth"), SourceStrategy::StructuredJson);
        assert_eq!(custom.strategy_for("Genesis"), SourceStrategy::HebrewMarkup);
    }

    #[test]
    fn test_hebrew_markup_book_is_aligned() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());

        let book = tokio_test::block_on(loader.load_book("Ruth")).unwrap();

        let verse = book.verse(1, 1).unwrap();
        assert_eq!(verse.words.len(), 3);
        assert_eq!(verse.words[0].translation, "Aconteció");
        assert_eq!(verse.words[0].lexicon_ref.as_deref(), Some("H1961"));
        assert_eq!(verse.words[2].translation, "que gobernaban los jueces");
        assert_eq!(
            verse.full_text.as_deref(),
            Some("Aconteció en los días que gobernaban los jueces .")
        );

        let verse = book.verse(1, 2).unwrap();
        assert_eq!(verse.words.len(), 3);
        assert_eq!(verse.words[0].translation, "El nombre");
        assert_eq!(verse.words[1].translation, PLACEHOLDER_TRANSLATION);
    }

    #[test]
    fn test_hebrew_markup_book_never_fetches_json() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());

        tokio_test::block_on(loader.load_book("Ruth")).unwrap();

        let requests = fetcher.requests();
        assert_eq!(requests, vec!["spavbl_usfx.xml", "hebrew/Ruth.xml"]);
        assert!(!requests.iter().any(|r| r.ends_with(".json")));
    }

    #[test]
    fn test_structured_book_gets_full_text() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());

        let book = tokio_test::block_on(loader.load_book("Genesis")).unwrap();

        assert_eq!(fetcher.requests(), vec!["spavbl_usfx.xml", "genesis.json"]);

        let first = book.verse(1, 1).unwrap();
        assert_eq!(first.words[0].morphology.as_deref(), Some("HR/Ncfsa"));
        assert_eq!(first.words[1].translation, "creó");
        assert_eq!(first.full_text.as_deref(), Some("En el principio creó Dios"));

        // No Spanish markup for 1:2, so the glosses stand in
        let second = book.verse(1, 2).unwrap();
        assert_eq!(second.full_text.as_deref(), Some("y la tierra"));
    }

    #[test]
    fn test_second_load_is_served_from_cache() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());

        let first = tokio_test::block_on(loader.load_book("Ruth")).unwrap();
        let fetches = fetcher.requests().len();
        let second = tokio_test::block_on(loader.load_book("Ruth")).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fetcher.requests().len(), fetches);
    }

    #[test]
    fn test_failed_fetch_leaves_no_entry() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());

        let result = tokio_test::block_on(loader.load_book("Exodus"));

        assert!(matches!(result, Err(InterlinealError::SourceNotFound(_))));
        assert!(!loader.store().contains("Exodus"));
        assert!(loader.cached("Exodus").is_none());
    }

    #[test]
    fn test_failed_reload_evicts_stale_entry() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());
        loader.store().put("Ruth", Book::default());
        fetcher.remove("hebrew/Ruth.xml");

        assert!(tokio_test::block_on(loader.load_book("Ruth")).is_err());
        assert!(!loader.store().contains("Ruth"));
    }

    #[test]
    fn test_spanish_fetch_failure_fails_load() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        fetcher.remove("spavbl_usfx.xml");
        let loader = loader(fetcher.clone());

        assert!(tokio_test::block_on(loader.load_book("Ruth")).is_err());
        assert_eq!(fetcher.requests(), vec!["spavbl_usfx.xml"]);
    }

    #[test]
    fn test_stray_byte_in_other_book_does_not_fail_load() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        // Latin-1 "ñ" inside the Exodus block
        let (head, tail) = SPANISH.split_once(" son<ve/>").unwrap();
        let mut body = head.as_bytes().to_vec();
        body.extend_from_slice(b" a\xf1o<ve/>");
        body.extend_from_slice(tail.as_bytes());
        fetcher.insert_bytes("spavbl_usfx.xml", body);
        let loader = loader(fetcher.clone());

        let book = tokio_test::block_on(loader.load_book("Ruth")).unwrap();

        assert!(book.is_complete());
        assert_eq!(book.verse(1, 1).unwrap().words[0].translation, "Aconteció");
    }

    #[test]
    fn test_invalid_json_fails_load() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        fetcher.insert("exodus.json", "[{\"chapter\": 1,");
        let loader = loader(fetcher.clone());

        let result = tokio_test::block_on(loader.load_book("Exodus"));
        assert!(matches!(result, Err(InterlinealError::Json(_))));
        assert!(!loader.store().contains("Exodus"));
    }

    #[test]
    fn test_incomplete_entry_is_reloaded() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        let loader = loader(fetcher.clone());
        loader.store().put("Ruth", Book::default());

        let book = tokio_test::block_on(loader.load_book("Ruth")).unwrap();

        assert!(book.is_complete());
        assert_eq!(fetcher.requests().len(), 2);
        assert!(loader.cached("Ruth").unwrap().is_complete());
    }

    #[test]
    fn test_book_missing_everywhere_is_stored_but_not_complete() {
        let fetcher = Arc::new(RecordingFetcher::with_defaults());
        fetcher.insert("hebrew/Obadiah.xml", "<book/>");
        let loader = loader(fetcher.clone());

        let book = tokio_test::block_on(loader.load_book("Obadiah")).unwrap();
        assert!(book.is_empty());
        assert!(!book.is_complete());

        tokio_test::block_on(loader.load_book("Obadiah")).unwrap();
        assert_eq!(fetcher.requests().len(), 4);
    }
}
