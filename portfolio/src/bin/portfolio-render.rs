//! Prerender the portfolio page to a static HTML file.
//!
//! ```text
//! portfolio-render --out dist/index.html
//! portfolio-render --content content.json > index.html
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_leptos::{content, render_portfolio};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "portfolio-render")]
#[command(about = "Render the portfolio page to static HTML")]
#[command(version)]
struct Args {
    /// JSON content file replacing the published tables
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout can carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let content = match &args.content {
        Some(path) => content::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => content::published(),
    };

    let html = render_portfolio(&content);

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => print!("{html}"),
    }

    Ok(())
}
