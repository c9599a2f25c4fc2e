//! Test fixture helpers for creating temporary site layouts.
//!
//! A site mirrors a typical deployment:
//!
//! ```text
//! <root>/links/index.html     page location
//! <root>/links/links.json     ./links.json
//! <root>/links.json           ../links.json
//! <root>/data/pages/links.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use url::Url;

/// Temporary site directory, removed on drop.
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    /// Create an empty site with the `links/` page directory.
    ///
    /// # Panics
    ///
    /// Panics if the directories cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(dir.path().join("links")).expect("Failed to create page dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the page inside the site.
    pub fn page_path(&self) -> PathBuf {
        self.root().join("links").join("index.html")
    }

    /// `file://` location of the page.
    pub fn page_url(&self) -> Url {
        Url::from_file_path(self.page_path()).expect("page path is absolute")
    }

    /// Write a JSON document at `relative` (from the site root).
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_json(&self, relative: &str, document: &Value) -> PathBuf {
        self.write_raw(relative, &document.to_string())
    }

    /// Write raw content at `relative` (from the site root).
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Path as a string (useful for CLI arguments).
    pub fn path_str(&self, relative: &str) -> String {
        self.root().join(relative).to_string_lossy().into_owned()
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// A data file with two profiles, a legacy profile and a common section.
pub fn sample_document() -> Value {
    json!({
        "common": {
            "tagline": "Shared tagline",
            "avatar": "assets/common.png",
            "theme": { "accent": "#ff5fa2", "bg": "#101014" },
            "social": [
                { "url": "https://t.me/common", "icon": "telegram", "label": "Telegram" }
            ],
            "buttons": [
                { "label": "Contact", "url": "https://example.com/contact" }
            ],
            "footer": {
                "lines": ["Made with care", "© 2026"],
                "cta": { "url": "https://example.com/about", "label": "About" }
            }
        },
        "profiles": {
            "pupuwaifu": {
                "title": "Pupu's links",
                "name": "Pupu",
                "tagline": "Cosplay & art",
                "avatar": "assets/pupu.png",
                "theme": { "accent": "#7c5cff" },
                "social": [
                    { "url": "https://instagram.com/pupu", "icon": "instagram" },
                    { "url": "https://x.com/pupu", "icon": "x" },
                    { "icon": "tiktok" }
                ],
                "buttons": [
                    { "label": "Shop", "url": "https://shop.example.com", "type": "outline" },
                    { "label": "Members only", "url": "https://vip.example.com", "locked": true }
                ]
            },
            "bare": { "name": "Bare" }
        },
        "legacy": { "name": "Old Style", "links": [{ "url": "https://old.example.com" }] }
    })
}
