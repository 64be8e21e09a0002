//! # kavarna-export
//!
//! Pre-renders the Kavárna U Kódu landing page into a single static
//! `index.html`, for hosts that serve plain files without running wasm.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults, writes dist/index.html
//! kavarna-export
//!
//! # Config file plus overrides
//! kavarna-export --config site.toml --year 2025 --out public/index.html
//! ```
//!
//! Settings are layered: built-in defaults, then `--config`, then flags.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use kavarna_site::{SiteConfig, render_page};

#[derive(Parser, Debug)]
#[command(name = "kavarna-export")]
#[command(about = "Pre-render the Kavárna U Kódu landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// TOML file with page settings (title, year, favicon_svg)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the document title
    #[arg(long)]
    title: Option<String>,

    /// Override the footer copyright year
    #[arg(long)]
    year: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(args: &Args) -> Result<SiteConfig> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SiteConfig::default(),
    };

    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if let Some(year) = args.year {
        config.year = Some(year);
    }

    debug!(?config, "resolved site config");
    Ok(config)
}

fn write_page(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))
}

fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("kavarna-export v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;
    let html = render_page(&config);
    write_page(&args.out, &html)?;

    info!(bytes = html.len(), path = %args.out.display(), "page written");
    println!("{}", args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
