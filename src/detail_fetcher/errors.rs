//! Error types for detail fetching
//!
//! A fetch failure never aborts a run; it carries enough context for the
//! diagnostic line and is then dropped by the pipeline.

/// Why a single detail fetch failed
#[derive(Debug, thiserror::Error)]
pub enum FetchErrorKind {
    /// Request could not be built, sent, or its body read (includes timeouts)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request target could not be formed from the template
    #[error("invalid request target: {0}")]
    Target(String),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// Body was neither JSON nor a page wrapping JSON in `<pre>`
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Body decoded to `null` or an empty object
    #[error("response contained no provider details")]
    EmptyDocument,

    /// Body decoded to JSON that is not an object (array, string, number, bool)
    #[error("response is not a provider detail object")]
    NotAnObject,

    /// Fetcher was used after `close()`
    #[error("fetch client already closed")]
    Closed,
}

/// A provider whose details could not be retrieved
#[derive(Debug, thiserror::Error)]
#[error("Error fetching details for {site_code} - {provider_type}: {kind}")]
pub struct FetchFailure {
    pub site_code: String,
    pub provider_type: String,
    #[source]
    pub kind: FetchErrorKind,
}

impl FetchFailure {
    #[must_use]
    pub fn new(
        site_code: impl Into<String>,
        provider_type: impl Into<String>,
        kind: FetchErrorKind,
    ) -> Self {
        Self {
            site_code: site_code.into(),
            provider_type: provider_type.into(),
            kind,
        }
    }

    /// True if the request never produced a response (network, timeout)
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, FetchErrorKind::Request(_))
    }
}
