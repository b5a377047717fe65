//! Core configuration types for provider scraping
//!
//! This module contains the main `ScrapeConfig` struct that the pipeline
//! driver receives in place of hard-coded paths and endpoint constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct for a scrape run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// JSON document holding the `results` list of provider summaries.
    pub(crate) input_path: PathBuf,

    /// CSV file the flat records are written to. Truncated at start.
    pub(crate) output_path: PathBuf,

    /// Detail endpoint with `{site_code}` and `{provider_type}` placeholders.
    ///
    /// **INVARIANT:** Validated in the builder; always contains both
    /// placeholders and yields an http(s) URL.
    pub(crate) endpoint_template: String,

    /// Value written into every row's `country` column.
    pub(crate) country: String,

    /// Stop after examining this many input entries.
    ///
    /// Counts entries, not written rows, so skipped entries use up the limit.
    /// Default: None (the whole list is processed)
    pub(crate) limit: Option<usize>,

    /// Pause after every detail request, in milliseconds.
    ///
    /// Default: None (no pause)
    pub(crate) request_delay_ms: Option<u64>,

    /// Timeout in seconds for a single detail request
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Emit an aggregate progress line every this many written rows.
    ///
    /// **INVARIANT:** Never zero (checked in the builder).
    pub(crate) progress_interval: usize,
}
