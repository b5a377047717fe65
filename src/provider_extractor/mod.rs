//! Provider record extraction.
//!
//! This module reads the provider summary list, models the raw detail
//! documents returned by the directory API, and flattens a summary plus its
//! detail into the fixed set of output columns.

// Sub-modules
pub mod extractors;
pub mod input;
pub mod schema;

// Re-exports for public API
pub use extractors::{FieldExtractor, extract};
pub use input::{load_summaries, parse_summaries};
pub use schema::{
    FlatOutputRecord, InstitutionLocation, OUTPUT_COLUMNS, ProviderDetail, ProviderSummary,
};
