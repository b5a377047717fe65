//! Configuration module for provider scraping
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring a scrape run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithInputPath, WithOutputPath};
pub use types::ScrapeConfig;
