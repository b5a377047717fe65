//! Progress reporting abstraction for scrape runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting,
//! a `log`-backed implementation for the binary and a no-op implementation
//! for library callers.

use log::{debug, info};
use std::path::Path;

use super::scrape_types::PipelineReport;
use crate::provider_extractor::FlatOutputRecord;

/// Trait for reporting scrape progress at key lifecycle events
///
/// Implementations can log to console, update a UI, collect into a test
/// buffer, etc. The pipeline decides when a milestone is due; reporters only
/// present it.
pub trait ProgressReporter: Send + Sync {
    /// Report that the input list was loaded
    fn report_started(&self, entries: usize);

    /// Report that a row was written; `count` is the running success counter
    fn report_record_written(&self, count: usize, record: &FlatOutputRecord);

    /// Report an aggregate milestone (every N written rows)
    fn report_milestone(&self, count: usize);

    /// Report that the run finished and where the rows went
    fn report_completed(&self, report: &PipelineReport, output: &Path);
}

/// Progress reporter that writes the classic console lines through `log`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report_started(&self, entries: usize) {
        debug!(target: "providerscrape::progress", "Loaded {entries} provider summaries");
    }

    fn report_record_written(&self, count: usize, record: &FlatOutputRecord) {
        info!(target: "providerscrape::progress", "Provider {count}: {} fetched.", record.name);
    }

    fn report_milestone(&self, count: usize) {
        info!(target: "providerscrape::progress", "Fetched {count} providers so far.");
    }

    fn report_completed(&self, report: &PipelineReport, output: &Path) {
        debug!(
            target: "providerscrape::progress",
            "{} entries, {} written, {} failed, {} without identifiers",
            report.entries_seen,
            report.rows_written,
            report.fetch_failures,
            report.skipped_missing_identifier
        );
        info!(target: "providerscrape::progress", "Details saved to {}", output.display());
    }
}

/// Progress reporter that does nothing
///
/// All methods are no-ops and will be inlined away by the compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_started(&self, _entries: usize) {}

    #[inline(always)]
    fn report_record_written(&self, _count: usize, _record: &FlatOutputRecord) {}

    #[inline(always)]
    fn report_milestone(&self, _count: usize) {}

    #[inline(always)]
    fn report_completed(&self, _report: &PipelineReport, _output: &Path) {}
}
