//! Detail fetching for individual providers.
//!
//! `DetailFetcher` is the seam the pipeline drives; `HttpDetailFetcher` is the
//! production implementation backed by a `reqwest` client.

// Sub-modules
pub mod body;
pub mod client;
pub mod errors;

// Re-exports for public API
pub use body::parse_detail_body;
pub use client::{CloseFuture, DetailFetcher, FetchFuture, HttpDetailFetcher};
pub use errors::{FetchErrorKind, FetchFailure};
