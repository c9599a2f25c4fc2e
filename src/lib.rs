//! linkpage library - link-in-bio page rendering.
//!
//! This library exposes the core of the `linkpage` CLI: data-source
//! discovery, profile loading and merging, and page rendering.
//!
//! # Modules
//!
//! - `source`: Candidate data-source locations and profile-id precedence
//! - `loader`: Try-in-order document loading behind the `Fetcher` trait
//! - `profile`: Data model and the merged profile view
//! - `render`: Page element tree, renderer and status banner
//! - `pipeline`: One page load from sources to rendered page
//! - `config`: Page configuration files
//! - `error`: Error types with user-recoverable hints
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod logging;
pub mod pipeline;
pub mod profile;
pub mod render;
pub mod source;
