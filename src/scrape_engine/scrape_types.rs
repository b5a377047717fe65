//! Core types for scrape runs.
//!
//! This module contains the fatal error type and the per-run report.

use serde::Serialize;
use std::path::PathBuf;

/// Errors that end a scrape run
///
/// Per-provider fetch problems are not listed here; they are
/// [`FetchFailure`](crate::detail_fetcher::FetchFailure)s and only skip the
/// provider.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Input list could not be read
    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input list is not a valid summary document
    #[error("Failed to parse input {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output file could not be created
    #[error("Failed to create output {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a row or flushing the table failed
    #[error("Failed to write output: {0}")]
    OutputWrite(#[from] csv::Error),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Convenience alias for Result with `ScrapeError`
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Counters for one pass over the input list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// Entries examined (after any limit)
    pub entries_seen: usize,
    /// Entries without a site code or provider type
    pub skipped_missing_identifier: usize,
    /// Entries whose detail fetch failed
    pub fetch_failures: usize,
    /// Rows appended to the output table
    pub rows_written: usize,
}
