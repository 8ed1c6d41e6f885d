pub mod file_fetcher;
pub mod http_fetcher;
pub mod sources;

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::config::HttpConfig;

pub use file_fetcher::FileFetcher;
pub use http_fetcher::HttpFetcher;
pub use sources::{SourceLayout, SourceReader};

/// Raw byte access to the data sources. No transformation happens here.
#[async_trait]
pub trait Fetcher {
    /// Fetch the resource at `path`, relative to the fetcher's root.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}

/// Pick an HTTP fetcher for `http://`/`https://` locations, a file fetcher otherwise.
pub fn fetcher_for_location(
    location: &str,
    http: &HttpConfig,
) -> Result<Arc<dyn Fetcher + Send + Sync>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpFetcher::new(location, http)?))
    } else {
        Ok(Arc::new(FileFetcher::new(location)))
    }
}
