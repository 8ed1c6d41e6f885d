use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{InterlinealError, Result};
use crate::config::HttpConfig;
use crate::fetcher::Fetcher;

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str, config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| InterlinealError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base: Self::base_url(base)?,
        })
    }

    /// Parse `base` as a directory URL so that joins append rather than replace
    /// the last segment.
    fn base_url(base: &str) -> Result<Url> {
        if base.ends_with('/') {
            Ok(Url::parse(base)?)
        } else {
            Ok(Url::parse(&format!("{}/", base))?)
        }
    }

    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?.to_vec();
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_appends_to_base_directory() {
        let fetcher =
            HttpFetcher::new("http://localhost:3000/data/bible", &HttpConfig::default()).unwrap();
        let url = fetcher.url_for("hebrew/Ruth.xml").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/data/bible/hebrew/Ruth.xml");
    }

    #[test]
    fn test_url_for_ignores_leading_slash() {
        let fetcher =
            HttpFetcher::new("https://example.com/data/", &HttpConfig::default()).unwrap();
        let url = fetcher.url_for("/spavbl_usfx.xml").unwrap();
        assert_eq!(url.as_str(), "https://example.com/data/spavbl_usfx.xml");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpFetcher::new("http://exa mple.com", &HttpConfig::default());
        assert!(matches!(result, Err(InterlinealError::InvalidUrl(_))));
    }
}
