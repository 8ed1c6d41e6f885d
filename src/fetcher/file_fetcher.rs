use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::app::{InterlinealError, Result};
use crate::fetcher::Fetcher;

/// Reads sources from a local data directory laid out like the served one.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.path_for(path);
        tracing::debug!("Reading {}", full_path.display());

        match tokio::fs::read(&full_path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InterlinealError::SourceNotFound(
                full_path.display().to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}
