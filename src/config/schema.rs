//! Page configuration schema.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Data file looked up under every path-based candidate.
pub const DEFAULT_DATA_FILE: &str = "links.json";

/// Explicit page configuration.
///
/// Every field is optional and overridable by the matching query parameter.
///
/// # Example YAML
///
/// ```yaml
/// profileId: pupuwaifu
/// dataBase: https://raw.githubusercontent.com/owner/links-data/main/data/pages/
/// dataFile: links.json
/// locale: zh
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Profile to render when no `id` query parameter is given.
    #[serde(default)]
    pub profile_id: Option<String>,

    /// Base URL the data file is resolved against.
    #[serde(default)]
    pub data_base: Option<String>,

    /// Data file name (defaults to `links.json`).
    #[serde(default)]
    pub data_file: Option<String>,

    /// Full data URL; takes priority over every other candidate.
    #[serde(default)]
    pub data_url: Option<String>,

    /// Language for fallback labels and status messages.
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl PageConfig {
    /// Data file name, falling back to [`DEFAULT_DATA_FILE`].
    pub fn data_file(&self) -> &str {
        self.data_file
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_DATA_FILE)
    }
}
