//! Loading page configuration from YAML or TOML files.

use std::path::Path;

use tracing::{debug, info, instrument, trace};

use super::schema::PageConfig;
use crate::error::{LinkError, Result};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml, .yml).
    Yaml,
    /// TOML format (.toml).
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        trace!(extension = %ext, "Detecting config format from extension");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Load a page configuration from a file.
///
/// The format is detected from the extension (`.yaml`, `.yml` or `.toml`).
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PageConfig> {
    let path = path.as_ref();
    info!("Loading configuration file");

    let format = ConfigFormat::from_extension(path).ok_or_else(|| {
        LinkError::ConfigParse(format!(
            "Unknown config format for '{}': expected .yaml, .yml, or .toml",
            path.display()
        ))
    })?;
    debug!(format = ?format, "Detected config format");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LinkError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            LinkError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read config file");

    load_config_from_str(&content, format)
}

/// Load a configuration file if it exists, returning the default otherwise.
pub fn load_optional_config<P: AsRef<Path>>(path: P) -> Result<PageConfig> {
    match load_config(path) {
        Err(LinkError::ConfigNotFound { path }) => {
            debug!(%path, "No configuration file, using defaults");
            Ok(PageConfig::default())
        }
        other => other,
    }
}

/// Load a page configuration from a string with a specified format.
#[instrument(skip(content), fields(format = ?format, content_len = content.len()))]
pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<PageConfig> {
    // Empty YAML documents deserialize to unit, not a map
    if content.trim().is_empty() {
        return Ok(PageConfig::default());
    }

    let config: PageConfig = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| LinkError::ConfigParse(format!("YAML: {e}")))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| LinkError::ConfigParse(format!("TOML: {e}")))?
        }
    };

    info!(
        profile_id = ?config.profile_id,
        data_base = ?config.data_base,
        data_file = config.data_file(),
        data_url = ?config.data_url,
        "Configuration loaded"
    );

    Ok(config)
}
