//! linkpage - render a link-in-bio page from a profile data file.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal, Write};

use clap::Parser;
use console::style;
use serde::Serialize;

use linkpage::cli::{self, Cli, Commands};
use linkpage::config::{self, PageConfig};
use linkpage::error::{LinkError, Result};
use linkpage::loader::{SourceFetcher, load_first};
use linkpage::logging;
use linkpage::pipeline::Pipeline;
use linkpage::profile::resolve_view;
use linkpage::render::Page;
use linkpage::source;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::Render(args)) => cmd_render(cli, args),
        Some(Commands::Sources(args)) => cmd_sources(cli, args),
        Some(Commands::View(args)) => cmd_view(cli, args),
        Some(Commands::Version) => cmd_version(cli),
        Some(Commands::Completions(args)) => cmd_completions(cli, args),
    }
}

// === Quick Start ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: RobotCommands,
    precedence: &'static str,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct RobotCommands {
    render: &'static str,
    sources: &'static str,
    view: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn print_quick_start(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &RobotQuickStart {
                tool: "linkpage",
                version: build_info::VERSION,
                description: "Render a link-in-bio page from a profile data file",
                commands: RobotCommands {
                    render: "linkpage render --page <DIR|URL> -o index.html",
                    sources: "linkpage sources --robot",
                    view: "linkpage view --id <PROFILE> --robot",
                },
                precedence: "query/flags > config file > globals > page attribute > default",
                output_modes: OutputModes {
                    human: "--format=text (default)",
                    robot: "--robot or --format=json",
                    compact: "--format=json-compact",
                },
            },
        );
        return Ok(());
    }

    println!(
        "{} {} - link-in-bio page renderer\n",
        style("linkpage").bold().cyan(),
        build_info::VERSION
    );
    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  Render ./links.json to stdout", style("linkpage render").green());
    println!(
        "  {}  Render one profile to a file",
        style("linkpage render --id shop -o index.html").green()
    );
    println!("  {}  Show data-source candidates", style("linkpage sources").green());
    println!("  {}  Print the merged profile", style("linkpage view").green());
    println!();
    println!("Run {} for full help", style("linkpage --help").yellow());
    Ok(())
}

// === Shared setup ===

fn load_page_config(cli: &Cli) -> Result<PageConfig> {
    match &cli.config {
        Some(path) => config::load_config(config::expand_home(path)?),
        None => match config::default_config_path() {
            Some(path) => config::load_optional_config(path),
            None => Ok(PageConfig::default()),
        },
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(LinkError::Io)
}

// === Command Implementations ===

#[derive(Serialize)]
struct RenderSummary<'a> {
    ok: bool,
    state: linkpage::pipeline::RunState,
    profile_id: &'a str,
    source: Option<&'a str>,
    output: Option<String>,
}

fn cmd_render(cli: &Cli, args: &cli::RenderArgs) -> Result<()> {
    let page_config = load_page_config(cli)?;
    let locale = cli.effective_locale(&page_config);
    let inputs = args.page.source_inputs(page_config)?;

    let fetcher = SourceFetcher::new(args.fetch.timeout())?.with_base(inputs.location.clone());
    let stylesheet = (!args.no_stylesheet).then(|| args.stylesheet.clone());
    let mut page = Page::new(locale).with_stylesheet(stylesheet);
    if let Some(attr) = &args.page.page_attr_id {
        page = page.with_profile_attribute(attr);
    }

    let outcome = runtime()?.block_on(Pipeline::new(fetcher, locale).run(&inputs, page));
    let html = outcome.page.to_html();

    match &args.output {
        Some(path) => {
            let path = config::expand_home(path)?;
            std::fs::write(&path, &html)?;

            if cli.use_json() {
                output_json(
                    cli,
                    &RenderSummary {
                        ok: outcome.is_rendered(),
                        state: outcome.state,
                        profile_id: &outcome.profile_id,
                        source: outcome.source.as_ref().map(|c| c.url.as_str()),
                        output: Some(path.display().to_string()),
                    },
                );
            } else if !cli.quiet && outcome.is_rendered() {
                println!(
                    "Rendered {} from {} to {}",
                    style(&outcome.profile_id).green(),
                    outcome.source.as_ref().map_or("?", |c| c.url.as_str()),
                    path.display()
                );
            }
        }
        None => {
            io::stdout().write_all(html.as_bytes())?;
        }
    }

    match outcome.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn cmd_sources(cli: &Cli, args: &cli::SourcesArgs) -> Result<()> {
    let inputs = args.page.source_inputs(load_page_config(cli)?)?;
    let resolved = source::resolve(&inputs);

    if cli.use_json() {
        output_json(cli, &resolved);
    } else {
        println!("{}: {}", style("Profile").bold(), resolved.profile_id);
        println!("{}:", style("Candidates").bold());
        for (i, candidate) in resolved.candidates.iter().enumerate() {
            println!(
                "  {}. {} {}",
                i + 1,
                candidate.url,
                style(format!("({:?})", candidate.origin)).dim()
            );
        }
    }
    Ok(())
}

fn cmd_view(cli: &Cli, args: &cli::ViewArgs) -> Result<()> {
    let page_config = load_page_config(cli)?;
    let locale = cli.effective_locale(&page_config);
    let inputs = args.page.source_inputs(page_config)?;
    let resolved = source::resolve(&inputs);

    let fetcher = SourceFetcher::new(args.fetch.timeout())?.with_base(inputs.location.clone());
    let loaded = runtime()?.block_on(load_first(&fetcher, &resolved.candidates))?;
    let view = resolve_view(&loaded.document, &resolved.profile_id, locale)?;

    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({ "source": loaded.source, "view": view }),
        );
    } else {
        println!("{}: {}", style("Source").bold(), loaded.source.url);
        println!("{}: {}", style("Profile").bold(), view.id);
        println!("{}: {}", style("Title").bold(), view.title);
        println!("{}: {}", style("Name").bold(), view.name);
        if !view.tagline.is_empty() {
            println!("{}: {}", style("Tagline").bold(), view.tagline);
        }
        println!("{}: {}", style("Avatar").bold(), view.avatar);
        println!("{}: {}", style("Social").bold(), view.social.len());
        println!(
            "{}: {} profile, {} common",
            style("Buttons").bold(),
            view.buttons.profile.len(),
            view.buttons.common.len()
        );
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty() == "true",
                "build_timestamp": build_info::build_timestamp(),
                "rustc_version": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        );
    } else {
        println!("linkpage {}", build_info::VERSION);
        println!(
            "git: {}{}",
            build_info::git_sha(),
            if build_info::git_dirty() == "true" {
                " (dirty)"
            } else {
                ""
            }
        );
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {}", build_info::rustc_semver());
        println!("target: {}", build_info::target());
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(_cli: &Cli, args: &cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "linkpage", &mut io::stdout());
    Ok(())
}

// === Utility Functions ===

fn output_json<T: Serialize>(cli: &Cli, data: &T) {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}

fn output_error(cli: &Cli, error: &LinkError) {
    if cli.use_json() {
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| error.to_string())
        );
    } else {
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }
}
