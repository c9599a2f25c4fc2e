//! Path helpers for configuration and page locations.
//!
//! Supports "~" home directory expansion and turning a local page path into
//! the `file://` location that relative data candidates are resolved against.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use url::Url;

use crate::error::{LinkError, Result};

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| LinkError::Other("Could not determine home directory".to_string()))
}

/// Expand a leading `~` to the home directory.
///
/// Other paths are returned unchanged.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return Ok(resolved);
    }
    Ok(path.to_path_buf())
}

/// Default configuration file location (`<config dir>/linkpage/config.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linkpage").join("config.yaml"))
}

/// Build the `file://` page location for a local page path.
///
/// Relative paths are taken from the current directory. A path ending in a
/// separator (or an existing directory) stands for the directory itself, so
/// `./links.json` resolves inside it.
pub fn page_url_from_path(path: &Path) -> Result<Url> {
    let expanded = expand_home(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };
    trace!(path = %absolute.display(), "Building page URL");

    let as_dir = absolute.is_dir() || path.to_string_lossy().ends_with('/');
    let url = if as_dir {
        Url::from_directory_path(&absolute)
    } else {
        Url::from_file_path(&absolute)
    };

    url.map_err(|()| LinkError::InvalidUrl {
        value: absolute.display().to_string(),
        reason: "not representable as a file URL".to_string(),
    })
}
