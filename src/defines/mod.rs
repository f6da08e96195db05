//! Dotenv overlay loading and build define injection
//!
//! A base `.env` file and an environment-specific `.env.<environment>` file
//! are merged (the environment file wins) and pushed into a
//! [`DefinitionSink`] as preprocessor definitions.

use std::path::PathBuf;
use thiserror::Error;

pub mod overlay;
pub mod sink;

pub use overlay::{load_overlay, EnvOverlay};
pub use sink::{inject, BuildEnvironment, DefinitionSink, InjectOptions};

/// Failure to load a dotenv layer that exists on disk.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed entry in {} near `{content}` (column {column})", .path.display())]
    Malformed { path: PathBuf, content: String, column: usize },
}
