//! Scrape Engine Module
//!
//! This module contains the pipeline driver that walks the provider list,
//! fetches each detail document, flattens it and appends it to the output
//! table, plus the error and progress types that go with it.

// Sub-modules
pub mod cleanup;
pub mod orchestrator;
pub mod progress;
pub mod scrape_types;

// Re-exports for public API
pub use cleanup::release_fetcher;
pub use orchestrator::Pipeline;
pub use progress::{LogProgress, NoOpProgress, ProgressReporter};
pub use scrape_types::{PipelineReport, ScrapeError, ScrapeResult};
