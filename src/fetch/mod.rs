//! Documentation page fetching (remote URL or saved file)

use crate::domain::Settings;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub mod http;
pub mod local;

/// Where a documentation page is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Url(url) => f.write_str(url),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// HTTP client options for remote fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl From<&Settings> for FetchOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            user_agent: settings.user_agent.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("failed reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetch the raw HTML of a documentation page.
///
/// Dispatches on the source kind:
/// - [`DocumentSource::Url`] → [`http::fetch_url`]
/// - [`DocumentSource::File`] → [`local::read_file`]
pub fn fetch_document(source: &DocumentSource, options: &FetchOptions) -> Result<String, FetchError> {
    match source {
        DocumentSource::Url(url) => http::fetch_url(url, options),
        DocumentSource::File(path) => local::read_file(path),
    }
}
