//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::ScrapeConfigBuilder;

impl<State> ScrapeConfigBuilder<State> {
    /// Override the detail endpoint template
    ///
    /// The template must contain `{site_code}` and `{provider_type}`; this is
    /// checked when the config is built.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use providerscrape::config::ScrapeConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ScrapeConfig::builder()
    ///     .input_path("providers.json")
    ///     .output_path("providers.csv")
    ///     .endpoint_template("http://localhost:8080/providers/{site_code}/{provider_type}")
    ///     .build()?;
    /// assert!(config.endpoint_template().starts_with("http://localhost:8080"));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn endpoint_template(mut self, template: impl Into<String>) -> Self {
        self.endpoint_template = template.into();
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Pause for `delay_ms` after each detail request; `None` or 0 disables it
    #[must_use]
    pub fn request_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        self.request_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn progress_interval(mut self, every: usize) -> Self {
        self.progress_interval = every;
        self
    }
}
