pub mod config;
pub mod content_saver;
pub mod detail_fetcher;
pub mod provider_extractor;
pub mod scrape_engine;
pub mod utils;

pub use config::ScrapeConfig;
pub use content_saver::{CsvRecordWriter, RecordSink};
pub use detail_fetcher::{DetailFetcher, FetchErrorKind, FetchFailure, HttpDetailFetcher};
pub use provider_extractor::{
    FieldExtractor, FlatOutputRecord, InstitutionLocation, ProviderDetail, ProviderSummary,
    extract,
};
pub use scrape_engine::{
    LogProgress, NoOpProgress, Pipeline, PipelineReport, ProgressReporter, ScrapeError,
    ScrapeResult,
};

/// Run one scrape pass over the configured input with the HTTP fetcher
///
/// # Errors
///
/// Returns a [`ScrapeError`] if the HTTP client cannot be built, the input
/// cannot be loaded, or the output cannot be written.
pub async fn scrape(config: ScrapeConfig) -> ScrapeResult<PipelineReport> {
    let fetcher = HttpDetailFetcher::new(&config)?;
    Pipeline::new(config).run(fetcher).await
}
