//! Fetching the export document from a running emanote instance.
//!
//! Provides an HTTP client with timeouts and size-limited downloads.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use std::io::Read;
use std::time::Duration;
use tracing::debug;

use super::model::{ExportDocument, NoteStore};

pub(crate) const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Upper bound on the export body size
pub(crate) const MAX_EXPORT_SIZE: u64 = 256 * 1024 * 1024;

/// Create an HTTP client with connect and total request timeouts.
pub(crate) fn create_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("emagraph/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

/// Validate HTTP response status code and return a descriptive error if not successful.
pub(crate) fn validate_response_status(response: &Response, context: &str) -> Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        bail!(
            "{}: HTTP {} - {}",
            context,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        );
    }
    Ok(())
}

/// Read the response body, refusing anything larger than `max_size`.
pub(crate) fn download_with_limit(response: Response, max_size: u64, context: &str) -> Result<Vec<u8>> {
    if let Some(content_length) = response.content_length() {
        if content_length > max_size {
            bail!(
                "{context}: Content-Length {content_length} bytes exceeds maximum allowed size of {max_size} bytes"
            );
        }
    }

    let mut bytes = Vec::new();
    response
        .take(max_size + 1)
        .read_to_end(&mut bytes)
        .context("Failed to read response body")?;
    if bytes.len() as u64 > max_size {
        bail!("{context}: Download size exceeds maximum allowed size of {max_size} bytes");
    }

    Ok(bytes)
}

/// Fetch all notes from the export endpoint at `url`.
pub fn fetch_notes(url: &str, timeout_secs: u64) -> Result<NoteStore> {
    let client = create_http_client(timeout_secs)?;
    debug!(url, "requesting note export");

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to reach emanote at {url}"))?;
    validate_response_status(&response, "Fetching export")?;

    let bytes = download_with_limit(response, MAX_EXPORT_SIZE, "Fetching export")?;
    parse_notes(&bytes).with_context(|| format!("Invalid export document from {url}"))
}

/// Parse an export document and keep only its `files` map.
pub fn parse_notes(bytes: &[u8]) -> Result<NoteStore> {
    let doc: ExportDocument =
        serde_json::from_slice(bytes).context("Failed to parse export JSON")?;
    Ok(doc.files)
}
