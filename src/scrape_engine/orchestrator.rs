//! Main scrape orchestration logic
//!
//! Walks the provider list strictly in order:
//! - Skip entries without both identifiers
//! - Fetch the detail document, skipping the provider on failure
//! - Flatten and append the row, then report progress
//! - Release the fetch client however the run ends

use log::debug;

use super::cleanup::release_fetcher;
use super::progress::{LogProgress, ProgressReporter};
use super::scrape_types::{PipelineReport, ScrapeResult};
use crate::config::ScrapeConfig;
use crate::content_saver::{CsvRecordWriter, RecordSink};
use crate::detail_fetcher::DetailFetcher;
use crate::provider_extractor::{FieldExtractor, ProviderSummary, load_summaries};

/// Pipeline driver for one scrape run
pub struct Pipeline<P: ProgressReporter = LogProgress> {
    config: ScrapeConfig,
    extractor: FieldExtractor,
    progress: P,
}

impl Pipeline<LogProgress> {
    /// Driver that reports through the `log` facade
    #[must_use]
    pub fn new(config: ScrapeConfig) -> Self {
        Self::with_progress(config, LogProgress)
    }
}

impl<P: ProgressReporter> Pipeline<P> {
    #[must_use]
    pub fn with_progress(config: ScrapeConfig, progress: P) -> Self {
        let extractor = FieldExtractor::new(config.country());
        Self {
            config,
            extractor,
            progress,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Run the full pass: read the input file, write the output file
    ///
    /// Takes ownership of the fetcher and closes it before returning, whether
    /// the pass succeeded or hit a fatal error.
    ///
    /// # Errors
    ///
    /// Returns a [`ScrapeError`](super::ScrapeError) if the input cannot be
    /// loaded or the output cannot be created or written. Individual fetch
    /// failures are not errors.
    pub async fn run<F: DetailFetcher>(&self, mut fetcher: F) -> ScrapeResult<PipelineReport> {
        let outcome = self.run_to_file(&fetcher).await;
        release_fetcher(&mut fetcher).await;
        outcome
    }

    async fn run_to_file<F: DetailFetcher>(&self, fetcher: &F) -> ScrapeResult<PipelineReport> {
        let summaries = load_summaries(self.config.input_path()).await?;
        let output_path = self.config.output_path();
        let mut sink = CsvRecordWriter::create(output_path)?;

        let report = self.process(&summaries, fetcher, &mut sink).await?;
        sink.finish()?;

        self.progress.report_completed(&report, output_path);
        Ok(report)
    }

    /// Drive the summaries through fetch, extract and write
    ///
    /// Does not close the fetcher; [`Pipeline::run`] owns that.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a row cannot be written; nothing after
    /// that row is processed.
    pub async fn process<F, S>(
        &self,
        summaries: &[ProviderSummary],
        fetcher: &F,
        sink: &mut S,
    ) -> ScrapeResult<PipelineReport>
    where
        F: DetailFetcher + ?Sized,
        S: RecordSink + ?Sized,
    {
        let mut report = PipelineReport::default();
        let limit = self.config.limit().unwrap_or(usize::MAX);
        let milestone_every = self.config.progress_interval().max(1);

        self.progress.report_started(summaries.len().min(limit));

        for (index, summary) in summaries.iter().take(limit).enumerate() {
            report.entries_seen += 1;

            let Some((site_code, provider_type)) = summary.identifiers() else {
                debug!(
                    target: "providerscrape::pipeline",
                    "Skipping entry {index}: missing site code or provider type"
                );
                report.skipped_missing_identifier += 1;
                continue;
            };

            let detail = match fetcher.fetch(&site_code, &provider_type).await {
                Ok(detail) => detail,
                Err(_failure) => {
                    // The fetcher has already logged the diagnostic line.
                    report.fetch_failures += 1;
                    continue;
                }
            };

            let record = self.extractor.extract(summary, &detail);
            sink.write_record(&record)?;

            report.rows_written += 1;
            self.progress.report_record_written(report.rows_written, &record);
            if report.rows_written % milestone_every == 0 {
                self.progress.report_milestone(report.rows_written);
            }
        }

        Ok(report)
    }
}
