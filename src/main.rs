//! houseflow-codegen: developer utilities for Houseflow
//!
//! Injects dotenv configuration into firmware builds and generates smart-home
//! trait and device type enum variants from the public documentation.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
