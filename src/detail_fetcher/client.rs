//! Fetch client abstraction and its HTTP implementation

use log::{debug, warn};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::body::parse_detail_body;
use super::errors::{FetchErrorKind, FetchFailure};
use crate::config::ScrapeConfig;
use crate::provider_extractor::ProviderDetail;
use crate::scrape_engine::{ScrapeError, ScrapeResult};
use crate::utils::constants::CHROME_USER_AGENT;
use crate::utils::url_utils::build_detail_url;

pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ProviderDetail, FetchFailure>> + Send + 'a>>;

pub type CloseFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Source of provider detail documents.
///
/// The pipeline owns exactly one fetcher for a run and calls `close()` once
/// when the run ends, whether it succeeded or not.
pub trait DetailFetcher: Send + Sync {
    /// Fetch the detail document for one provider
    ///
    /// Both identifiers are non-empty. Failures are returned, never panicked,
    /// and implementations log a diagnostic line for each one.
    fn fetch<'a>(&'a self, site_code: &'a str, provider_type: &'a str) -> FetchFuture<'a>;

    /// Release the underlying client. Calling it twice is harmless.
    fn close(&mut self) -> CloseFuture<'_>;
}

/// Fetches details straight from the directory API over HTTP
#[derive(Debug)]
pub struct HttpDetailFetcher {
    client: Option<Client>,
    endpoint_template: String,
    request_timeout: Duration,
    request_delay: Option<Duration>,
}

impl HttpDetailFetcher {
    /// Build a fetcher from the run configuration
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::HttpClient`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ScrapeConfig) -> ScrapeResult<Self> {
        let client = Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(ScrapeError::HttpClient)?;

        Ok(Self {
            client: Some(client),
            endpoint_template: config.endpoint_template().to_string(),
            request_timeout: config.request_timeout(),
            request_delay: config.request_delay(),
        })
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    async fn fetch_detail(
        &self,
        site_code: &str,
        provider_type: &str,
    ) -> Result<ProviderDetail, FetchErrorKind> {
        let client = self.client.as_ref().ok_or(FetchErrorKind::Closed)?;
        let url = build_detail_url(&self.endpoint_template, site_code, provider_type)
            .map_err(|e| FetchErrorKind::Target(e.to_string()))?;

        debug!(target: "providerscrape::fetch", "GET {url}");

        let response = client
            .get(&url)
            .timeout(self.request_timeout)
            .header("Accept", "application/json, text/plain, */*")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchErrorKind::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_detail_body(&body)
    }
}

impl DetailFetcher for HttpDetailFetcher {
    fn fetch<'a>(&'a self, site_code: &'a str, provider_type: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            let outcome = self.fetch_detail(site_code, provider_type).await;

            if let Some(delay) = self.request_delay {
                tokio::time::sleep(delay).await;
            }

            outcome.map_err(|kind| {
                let failure = FetchFailure::new(site_code, provider_type, kind);
                warn!(target: "providerscrape::fetch", "{failure}");
                failure
            })
        })
    }

    fn close(&mut self) -> CloseFuture<'_> {
        Box::pin(async move {
            if self.client.take().is_some() {
                debug!(target: "providerscrape::fetch", "HTTP client released");
            }
        })
    }
}
