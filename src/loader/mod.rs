//! Profile document loading.
//!
//! Candidates are tried strictly in order; the first one that fetches and
//! parses wins. Failures are logged and the loop moves on. Fetching goes
//! through the [`Fetcher`] trait so the fallback logic can be tested without
//! a network.

mod fetch;
pub mod mock;

pub use fetch::{SourceFetcher, parse_document};

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::error::{LinkError, Result};
use crate::profile::ProfileDocument;
use crate::source::Candidate;

/// Retrieves and parses a profile document from one location.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and parse the body as a profile document.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// body that is not a valid profile document.
    async fn fetch_document(&self, url: &str) -> Result<ProfileDocument>;
}

/// A successfully loaded document and the candidate it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: ProfileDocument,
    pub source: Candidate,
}

/// Try each candidate in order, returning the first that loads.
///
/// When every candidate fails, the last failure is returned; an empty
/// candidate list yields [`LinkError::NoDataSource`].
#[instrument(skip_all, fields(candidates = candidates.len()))]
pub async fn load_first<F>(fetcher: &F, candidates: &[Candidate]) -> Result<LoadedDocument>
where
    F: Fetcher + ?Sized,
{
    let mut last_error = None;

    for (attempt, candidate) in candidates.iter().enumerate() {
        debug!(attempt, url = %candidate.url, origin = ?candidate.origin, "Trying data source");
        match fetcher.fetch_document(&candidate.url).await {
            Ok(document) => {
                info!(url = %candidate.url, "Loaded profile document");
                return Ok(LoadedDocument {
                    document,
                    source: candidate.clone(),
                });
            }
            Err(e) => {
                warn!(url = %candidate.url, error = %e, "Could not read data source");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(LinkError::NoDataSource))
}
