//! Command-line interface for houseflow-codegen
//!
//! Provides `defines`/`upload-flags` for firmware builds and `traits`/`types`
//! for smart-home enum generation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use houseflow_codegen::config::load_settings;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod defines;
mod scrape;

/// Houseflow developer utilities: dotenv build defines and smart-home enum generation
#[derive(Parser)]
#[command(name = "houseflow-codegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML or YAML); auto-discovered in the working directory when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print merged dotenv entries as preprocessor define flags
    Defines(defines::DefinesArgs),

    /// Print upload tool flags derived from the merged dotenv entries
    UploadFlags(defines::UploadFlagsArgs),

    /// Generate device trait enum variants from the trait documentation
    Traits(scrape::ScrapeArgs),

    /// Generate device type enum variants from the type documentation
    Types(scrape::ScrapeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir().context("Failed resolving working directory")?;
    let settings = load_settings(&cwd, cli.config.as_deref())?;

    match cli.command {
        Commands::Defines(args) => defines::run_defines(args, settings),
        Commands::UploadFlags(args) => defines::run_upload_flags(args, settings),
        Commands::Traits(args) => scrape::run_traits(args, settings),
        Commands::Types(args) => scrape::run_types(args, settings),
    }
}
