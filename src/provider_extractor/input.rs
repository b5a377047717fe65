//! Loading of the provider summary list.

use std::path::Path;

use super::schema::{ProviderSummary, SummaryDocument};
use crate::scrape_engine::{ScrapeError, ScrapeResult};

/// Read and parse the summary list at `path`
///
/// Entries without a `result` object come back as empty summaries so the
/// pipeline can count them as skipped.
///
/// # Errors
///
/// Returns [`ScrapeError::InputRead`] if the file cannot be read and
/// [`ScrapeError::InputParse`] if it is not a valid summary document.
pub async fn load_summaries(path: &Path) -> ScrapeResult<Vec<ProviderSummary>> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|source| ScrapeError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_summaries(&raw).map_err(|source| ScrapeError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a summary document from bytes
///
/// # Errors
///
/// Returns the underlying `serde_json` error if the bytes are not a JSON
/// object of the expected shape.
pub fn parse_summaries(raw: &[u8]) -> serde_json::Result<Vec<ProviderSummary>> {
    let document: SummaryDocument = serde_json::from_slice(raw)?;
    Ok(document
        .results
        .into_iter()
        .map(|entry| entry.result.unwrap_or_default())
        .collect())
}
