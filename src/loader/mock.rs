//! Mock fetcher for testing the loader and pipeline without a network.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkpage::loader::mock::MockFetcher;
//!
//! let fetcher = MockFetcher::new()
//!     .with_status("https://primary/links.json", 404)
//!     .with_document("https://fallback/links.json", serde_json::json!({ "profiles": {} }));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

use super::{Fetcher, parse_document};
use crate::error::{LinkError, Result};
use crate::profile::ProfileDocument;

/// Canned response for one URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with this body.
    Body(String),
    /// Non-success HTTP status.
    Status(u16),
    /// Network failure with this reason.
    Transport(String),
}

/// Fetcher answering from a fixed table and recording every request.
///
/// URLs without a registered response fail with a transport error.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `url` with a JSON document.
    #[must_use]
    pub fn with_document(self, url: &str, document: Value) -> Self {
        self.with_body(url, &document.to_string())
    }

    /// Respond to `url` with a raw body.
    #[must_use]
    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Body(body.to_string()));
        self
    }

    /// Respond to `url` with an error status.
    #[must_use]
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Status(status));
        self
    }

    /// Fail `url` with a transport error.
    #[must_use]
    pub fn with_transport_error(mut self, url: &str, reason: &str) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Transport(reason.to_string()));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_document(&self, url: &str) -> Result<ProfileDocument> {
        trace!(url, "Mock fetch");
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => parse_document(url, body.as_bytes()),
            Some(MockResponse::Status(status)) => Err(LinkError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }),
            Some(MockResponse::Transport(reason)) => Err(LinkError::Transport {
                url: url.to_string(),
                reason: reason.clone(),
            }),
            None => Err(LinkError::Transport {
                url: url.to_string(),
                reason: "no route to host".to_string(),
            }),
        }
    }
}
