//! Production fetcher for `http(s)://` and `file://` data sources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, trace};
use url::Url;

use super::Fetcher;
use crate::error::{LinkError, Result};
use crate::profile::ProfileDocument;

/// Parse a response body as a profile document.
pub fn parse_document(url: &str, body: &[u8]) -> Result<ProfileDocument> {
    serde_json::from_slice(body).map_err(|e| LinkError::Json {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn map_reqwest_error(url: &Url, e: &reqwest::Error) -> LinkError {
    LinkError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

/// Fetches data files over HTTP with caching disabled, or from local disk.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
    timeout: Option<Duration>,
    base: Option<Url>,
}

impl SourceFetcher {
    /// Create a fetcher. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("linkpage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LinkError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            timeout,
            base: None,
        })
    }

    /// Resolve relative candidate URLs against the page location.
    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    fn parse_url(&self, raw: &str) -> Result<Url> {
        let parsed = match &self.base {
            Some(base) => base.join(raw),
            None => Url::parse(raw),
        };
        parsed.map_err(|e| LinkError::InvalidUrl {
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_http(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, &e))?;

        let status = response.status();
        trace!(url = %url, status = status.as_u16(), "Received response");
        if !status.is_success() {
            return Err(LinkError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(url, &e))?;
        Ok(body.to_vec())
    }

    async fn fetch_file(url: &Url) -> Result<Vec<u8>> {
        let path = url.to_file_path().map_err(|()| LinkError::InvalidUrl {
            value: url.to_string(),
            reason: "not a local file path".to_string(),
        })?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| LinkError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        match url.scheme() {
            "http" | "https" => self.fetch_http(url).await,
            "file" => Self::fetch_file(url).await,
            other => Err(LinkError::InvalidUrl {
                value: url.to_string(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

#[async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch_document(&self, raw: &str) -> Result<ProfileDocument> {
        let url = self.parse_url(raw)?;
        debug!(url = %url, timeout = ?self.timeout, "Fetching data source");

        let body = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetch_bytes(&url))
                .await
                .map_err(|_| LinkError::Timeout {
                    url: url.to_string(),
                    after: limit,
                })??,
            None => self.fetch_bytes(&url).await?,
        };

        parse_document(url.as_str(), &body)
    }
}
