//! Fetch client cleanup
//!
//! This module handles releasing the fetch client once a run is over.

use log::debug;

use crate::detail_fetcher::DetailFetcher;

/// Close the fetch client; called on every exit path of a run
pub async fn release_fetcher<F: DetailFetcher + ?Sized>(fetcher: &mut F) {
    debug!(target: "providerscrape::cleanup", "Closing fetch client");
    fetcher.close().await;
    debug!(target: "providerscrape::cleanup", "Fetch client closed");
}
