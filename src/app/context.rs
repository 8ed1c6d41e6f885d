use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{fetcher_for_location, Fetcher, SourceReader};
use crate::loader::{BookLoader, StrategyTable};
use crate::store::MemoryStore;

pub struct AppContext {
    pub store: Arc<MemoryStore>,
    pub loader: BookLoader<MemoryStore>,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = fetcher_for_location(&config.source.location, &config.http)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Wire the context around an existing fetcher.
    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let sources = SourceReader::new(fetcher, config.source.layout.clone());
        let strategies = StrategyTable::new(config.source.structured_books.iter().cloned());
        let loader = BookLoader::new(sources, store.clone(), strategies);

        Self { store, loader }
    }
}
