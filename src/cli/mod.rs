//! CLI argument definitions.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::config::{PageConfig, page_url_from_path};
use crate::error::Result;
use crate::locale::Locale;
use crate::source::{Globals, QueryParams, SourceInputs};

/// linkpage - render a link-in-bio page from a profile data file.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "linkpage", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "LINKS_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Page configuration file (YAML or TOML)
    #[arg(long, short = 'c', global = true, env = "LINKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Language for fallback labels and status messages
    #[arg(long, global = true, env = "LINKS_LOCALE")]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }

    /// Effective locale: flag, then config file, then the default.
    pub fn effective_locale(&self, config: &PageConfig) -> Locale {
        self.locale.or(config.locale).unwrap_or_default()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the profile and render the page as HTML
    Render(RenderArgs),

    /// Show the resolved profile id and data-source candidates
    Sources(SourcesArgs),

    /// Load the profile and print the merged view
    View(ViewArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where the page lives and the overrides it would see.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page location: http(s)/file URL or a local path ("." = current directory)
    #[arg(long, short = 'p', default_value = ".")]
    pub page: String,

    /// Profile id (same as the `id` query parameter)
    #[arg(long)]
    pub id: Option<String>,

    /// Data-source base URL (same as the `base` query parameter)
    #[arg(long)]
    pub base: Option<String>,

    /// Full data-source URL (same as the `dataUrl` query parameter)
    #[arg(long)]
    pub data_url: Option<String>,

    /// Data file name, overriding the config file
    #[arg(long)]
    pub data_file: Option<String>,

    /// Fallback profile id consulted after the config file
    #[arg(long, env = "LINKS_PROFILE_ID")]
    pub global_profile_id: Option<String>,

    /// Fallback data base consulted after the config file
    #[arg(long, env = "LINKS_DATA_BASE")]
    pub global_data_base: Option<String>,

    /// `data-profile-id` attribute of the page body
    #[arg(long)]
    pub page_attr_id: Option<String>,
}

impl PageArgs {
    /// Build source-resolution inputs on top of the loaded configuration.
    ///
    /// Query parameters embedded in `--page` are kept; `--id`, `--base` and
    /// `--data-url` win over them.
    pub fn source_inputs(&self, mut config: PageConfig) -> Result<SourceInputs> {
        let location = parse_page_location(&self.page)?;
        if self.data_file.is_some() {
            config.data_file.clone_from(&self.data_file);
        }

        let query = QueryParams::from_url(&location).overlay(QueryParams {
            id: self.id.clone(),
            base: self.base.clone(),
            data_url: self.data_url.clone(),
        });

        Ok(SourceInputs {
            location,
            query,
            config,
            globals: Globals {
                profile_id: self.global_profile_id.clone(),
                data_base: self.global_data_base.clone(),
            },
            page_attribute: self.page_attr_id.clone(),
        })
    }
}

/// Interpret `--page` as a URL when it has a supported scheme, else a path.
pub fn parse_page_location(raw: &str) -> Result<Url> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https" | "file") => Ok(url),
        _ => page_url_from_path(Path::new(raw)),
    }
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Per-request timeout in seconds (0 = no timeout)
    #[arg(long, short = 't', default_value = "15")]
    pub timeout: u64,
}

impl FetchArgs {
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout))
        }
    }
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Write the HTML here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Stylesheet linked from the page head
    #[arg(long, default_value = "styles.css")]
    pub stylesheet: String,

    /// Do not link a stylesheet
    #[arg(long, conflicts_with = "stylesheet")]
    pub no_stylesheet: bool,
}

#[derive(Parser, Debug)]
pub struct SourcesArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
