//! Vernissage - a terminal browser for an art collective's catalogue.
//!
//! # Usage
//!
//! ```bash
//! vernissage ./catalogue
//! vernissage --watch --section artists ./catalogue
//! vernissage https://example.org/catalogue
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vernissage::app::App;
use vernissage::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use vernissage::data::DataSource;

/// A terminal browser for artists and exhibitions
#[derive(Parser, Debug)]
#[command(name = "vernissage", version, about, long_about = None)]
struct Cli {
    /// Catalogue directory or http(s) base URL holding artists.json and exhibitions.json
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Reload when the local resource files change
    #[arg(short, long)]
    watch: bool,

    /// Section to show first (e.g. artists)
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Disable inline image rendering (show placeholders only)
    #[arg(long)]
    no_images: bool,

    /// Force image rendering to use half-cell fallback mode
    #[arg(long)]
    force_half_cell: bool,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("vernissage.log")
}

/// Build the log filter from a `RUST_LOG` value, falling back to `warn`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

// The TUI owns the terminal, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        source: cli.source.clone(),
        ..parse_flag_tokens(&raw_args)
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_path = effective.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    let source = DataSource::parse(effective.source.as_deref().unwrap_or("."));
    if let DataSource::Directory(dir) = &source
        && !dir.is_dir()
    {
        anyhow::bail!("Catalogue directory not found: {}", dir.display());
    }
    tracing::info!(source = %source.label(), log = %log_path.display(), "configuration resolved");

    let mut app = App::new(source)
        .with_initial_section(effective.section)
        .with_watch(effective.watch)
        .with_force_half_cell(effective.force_half_cell)
        .with_images_enabled(!effective.no_images)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
