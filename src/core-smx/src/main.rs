use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use core_smx::{SitemapOptions, SitemapUrl, SitemapWriter};

#[derive(Parser)]
#[command(name = "core-sitemap")]
#[command(about = "The Core Sitemap Toolkit", long_about = None)]
struct CoreCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap files from a JSON array of URL entries
    Generate {
        /// JSON file holding the URL entries to write.
        #[arg(short, long, value_parser = validate_entries_file)]
        entries: PathBuf,

        /// Directory the sitemap files are written into (created if missing).
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Canonical site root used to resolve site-relative locations.
        #[arg(short, long)]
        base_url: String,

        /// Public base URL under which the generated files will be served.
        #[arg(short, long, value_parser = validate_url)]
        sitemap_base_url: String,

        /// Override the per-file URL cap (defaults to the protocol's 50,000).
        #[arg(short, long)]
        max_urls: Option<usize>,
    },
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_entries_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Entries path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Entries path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn generate(
    entries: &Path,
    out_dir: &Path,
    base_url: &str,
    sitemap_base_url: &str,
    max_urls: Option<usize>,
) -> anyhow::Result<usize> {
    let raw = std::fs::read_to_string(entries)
        .with_context(|| format!("cannot read entries file {}", entries.display()))?;
    let urls: Vec<SitemapUrl> = serde_json::from_str(&raw).with_context(|| {
        format!(
            "entries file {} is not a JSON array of URL entries",
            entries.display()
        )
    })?;

    let options = match max_urls {
        Some(max) => SitemapOptions::builder().max_urls(max).build(),
        None => SitemapOptions::default(),
    };

    let mut writer = SitemapWriter::with_options(out_dir, base_url, options);
    for url in urls {
        writer.add_url(url);
    }
    let count = writer.len();
    writer.write(sitemap_base_url)?;
    Ok(count)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "core_smx=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = CoreCli::parse();

    match &cli.command {
        Commands::Generate {
            entries,
            out_dir,
            base_url,
            sitemap_base_url,
            max_urls,
        } => match generate(entries, out_dir, base_url, sitemap_base_url, *max_urls) {
            Ok(count) => println!(
                "Wrote sitemap files for {} URLs into {}",
                count,
                out_dir.display()
            ),
            Err(e) => {
                eprintln!("Sitemap generation failed: {e:#}");
                std::process::exit(1);
            }
        },
    }
}
