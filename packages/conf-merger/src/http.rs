//! HTTP client wrapper for downloading configuration documents.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{MergerError, Result};

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("conf-merger/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download a document as text.
///
/// Non-2xx responses are errors. Each call makes exactly one request.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
pub fn download_text(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url = %url, "Downloading document");

    let fetch = || -> std::result::Result<Vec<u8>, reqwest::Error> {
        let response = client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    };

    let bytes = fetch().map_err(|source| MergerError::SourceDownload {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!(url = %url, bytes = bytes.len(), "Downloaded document");
    Ok(bytes_to_string(&bytes, url))
}

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// Logs a warning naming `what` when the input is not valid UTF-8.
#[must_use]
pub fn bytes_to_string(bytes: &[u8], what: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(source = %what, error = %e, "Invalid UTF-8, decoding lossily");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
