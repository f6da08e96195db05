//! Traits and types command implementation

use anyhow::{Context, Result};
use clap::Args;
use houseflow_codegen::config::{merge_cli_with_settings, CliOverrides};
use houseflow_codegen::domain::Settings;
use houseflow_codegen::fetch::{fetch_document, DocumentSource, FetchOptions};
use houseflow_codegen::render::{render_trait, render_type, write_blocks, RenderOptions};
use houseflow_codegen::scrape::{parse_traits, parse_types};
use std::io;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScrapeArgs {
    /// Read a saved copy of the page instead of fetching it
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Fetch this URL instead of the configured page
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Add `#[serde(rename = "...")]` attributes with the wire identifier
    #[arg(long)]
    pub serde_rename: bool,
}

impl ScrapeArgs {
    fn source(&self, configured_url: &str) -> DocumentSource {
        match &self.input {
            Some(path) => DocumentSource::File(path.clone()),
            None => DocumentSource::Url(configured_url.to_string()),
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions { serde_rename: self.serde_rename }
    }
}

pub fn run_traits(args: ScrapeArgs, settings: Settings) -> Result<()> {
    let settings = merge_cli_with_settings(
        settings,
        CliOverrides {
            traits_url: args.url.clone(),
            timeout_secs: args.timeout,
            ..CliOverrides::default()
        },
    );
    let source = args.source(&settings.traits_url);
    let html = fetch_document(&source, &FetchOptions::from(&settings))
        .with_context(|| format!("Failed fetching trait page {source}"))?;

    let rows =
        parse_traits(&html).with_context(|| format!("Unexpected trait page layout at {source}"))?;
    if rows.is_empty() {
        tracing::warn!("No trait rows found at {}", source);
    }

    let options = args.render_options();
    let mut out = io::stdout().lock();
    write_blocks(&mut out, rows.iter().map(|row| render_trait(row, &options)))
        .context("Failed writing output")?;
    Ok(())
}

pub fn run_types(args: ScrapeArgs, settings: Settings) -> Result<()> {
    let settings = merge_cli_with_settings(
        settings,
        CliOverrides {
            types_url: args.url.clone(),
            timeout_secs: args.timeout,
            ..CliOverrides::default()
        },
    );
    let source = args.source(&settings.types_url);
    let html = fetch_document(&source, &FetchOptions::from(&settings))
        .with_context(|| format!("Failed fetching type page {source}"))?;

    let rows =
        parse_types(&html).with_context(|| format!("Unexpected type page layout at {source}"))?;
    let missing = rows.iter().filter(|row| row.description.is_empty()).count();
    if missing > 0 {
        tracing::warn!("{} of {} device types have no description", missing, rows.len());
    }

    let options = args.render_options();
    let mut out = io::stdout().lock();
    write_blocks(&mut out, rows.iter().map(|row| render_type(row, &options)))
        .context("Failed writing output")?;
    Ok(())
}
