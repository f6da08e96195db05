//! Blocking HTTP fetch

use super::{FetchError, FetchOptions};
use reqwest::blocking::Client;

/// GET `url` and return the body. Any non-success status is an error; there
/// is no retry.
pub fn fetch_url(url: &str, options: &FetchOptions) -> Result<String, FetchError> {
    let client = Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .build()
        .map_err(FetchError::Client)?;

    tracing::info!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status });
    }

    let body = response
        .text()
        .map_err(|source| FetchError::Request { url: url.to_string(), source })?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
