//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the input and output paths are set before building a
//! `ScrapeConfig`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::ScrapeConfig;
use crate::utils::{
    DEFAULT_COUNTRY, DEFAULT_ENDPOINT_TEMPLATE, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_REQUEST_TIMEOUT_SECS, validate_endpoint_template,
};

// Type states for the builder
pub struct WithInputPath;
pub struct WithOutputPath;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) input_path: Option<PathBuf>,
    pub(crate) output_path: Option<PathBuf>,
    pub(crate) endpoint_template: String,
    pub(crate) country: String,
    pub(crate) limit: Option<usize>,
    pub(crate) request_delay_ms: Option<u64>,
    pub(crate) request_timeout_secs: u64,
    pub(crate) progress_interval: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            limit: None,
            request_delay_ms: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl<State> ScrapeConfigBuilder<State> {
    fn transition<Next>(self) -> ScrapeConfigBuilder<Next> {
        ScrapeConfigBuilder {
            input_path: self.input_path,
            output_path: self.output_path,
            endpoint_template: self.endpoint_template,
            country: self.country,
            limit: self.limit,
            request_delay_ms: self.request_delay_ms,
            request_timeout_secs: self.request_timeout_secs,
            progress_interval: self.progress_interval,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithInputPath> {
        self.input_path = Some(path.into());
        self.transition()
    }
}

impl ScrapeConfigBuilder<WithInputPath> {
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithOutputPath> {
        self.output_path = Some(path.into());
        self.transition()
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithOutputPath> {
    /// Validate and produce the config
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint template is unusable, if the progress
    /// interval or request timeout is zero, or if the input and output paths
    /// are the same file.
    pub fn build(self) -> Result<ScrapeConfig> {
        validate_endpoint_template(&self.endpoint_template)?;

        if self.progress_interval == 0 {
            return Err(anyhow!("progress_interval must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be at least 1"));
        }

        let input_path = self
            .input_path
            .ok_or_else(|| anyhow!("input_path is required"))?;
        let output_path = self
            .output_path
            .ok_or_else(|| anyhow!("output_path is required"))?;

        // Opening the output truncates it, which would destroy the input first.
        if input_path == output_path {
            return Err(anyhow!(
                "input and output paths must differ: {}",
                input_path.display()
            ));
        }

        Ok(ScrapeConfig {
            input_path,
            output_path,
            endpoint_template: self.endpoint_template,
            country: self.country,
            limit: self.limit,
            request_delay_ms: self.request_delay_ms,
            request_timeout_secs: self.request_timeout_secs,
            progress_interval: self.progress_interval,
        })
    }
}
