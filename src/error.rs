//! Error types for link page operations.

use std::time::Duration;

use thiserror::Error;

/// Primary error type for link page operations.
#[derive(Error, Debug)]
pub enum LinkError {
    // Data source errors
    #[error("No data source available")]
    NoDataSource,

    #[error("Network error fetching {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Timed out fetching {url} after {after:?}")]
    Timeout { url: String, after: Duration },

    #[error("HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid JSON from {url}: {reason}")]
    Json { url: String, reason: String },

    #[error("Invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    // Profile errors
    #[error("Profile not found: {id}")]
    ProfileNotFound { id: String },

    // Render errors
    #[error("Page has no element with id '{id}'")]
    MissingElement { id: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl LinkError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoDataSource
                | Self::ProfileNotFound { .. }
                | Self::InvalidUrl { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NoDataSource => Some("Pass --data-url or --base to point at links.json"),
            Self::ProfileNotFound { .. } => {
                Some("Check the profile id against the keys under \"profiles\"")
            }
            Self::HttpStatus { .. } => Some("Verify the data file exists at the candidate URL"),
            Self::Timeout { .. } => Some("Raise --timeout or use --timeout 0 to wait indefinitely"),
            Self::ConfigNotFound { .. } => Some("Check the --config path"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using LinkError.
pub type Result<T> = std::result::Result<T, LinkError>;
