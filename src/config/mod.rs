//! Configuration for page data-source discovery.
//!
//! The configuration value replaces the page-global config object: it names
//! the profile to render and where the data file lives. It is loaded from a
//! YAML or TOML file and passed explicitly into source resolution.

mod loader;
mod path;
mod schema;

pub use loader::{ConfigFormat, load_config, load_config_from_str, load_optional_config};
pub use path::{default_config_path, expand_home, home_dir, page_url_from_path};
pub use schema::{DEFAULT_DATA_FILE, PageConfig};
