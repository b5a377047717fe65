//! URL construction utilities.
//!
//! This module turns the configured endpoint template and a provider's
//! identifiers into the detail request target.

use anyhow::{Result, anyhow};
use url::Url;

use super::constants::{PROVIDER_TYPE_PLACEHOLDER, SITE_CODE_PLACEHOLDER};

/// Check that a template names both placeholders and yields an http(s) URL
///
/// # Errors
///
/// Returns an error if either placeholder is missing or if substituting
/// sample identifiers does not produce an absolute http/https URL.
pub fn validate_endpoint_template(template: &str) -> Result<()> {
    for placeholder in [SITE_CODE_PLACEHOLDER, PROVIDER_TYPE_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(anyhow!(
                "Endpoint template '{template}' is missing the {placeholder} placeholder"
            ));
        }
    }

    let sample = build_detail_url(template, "SITE", "TYPE")?;
    if !is_valid_url(&sample) {
        return Err(anyhow!(
            "Endpoint template '{template}' does not produce an http(s) URL"
        ));
    }
    Ok(())
}

/// Substitute both identifiers into the endpoint template
///
/// Identifiers are percent-encoded so a code containing `/` or spaces stays
/// within its own path segment.
///
/// # Errors
///
/// Returns an error if the substituted string does not parse as a URL.
pub fn build_detail_url(template: &str, site_code: &str, provider_type: &str) -> Result<String> {
    let target = template
        .replace(SITE_CODE_PLACEHOLDER, &urlencoding::encode(site_code))
        .replace(PROVIDER_TYPE_PLACEHOLDER, &urlencoding::encode(provider_type));

    let parsed = Url::parse(&target).map_err(|e| anyhow!("Failed to parse URL '{target}': {e}"))?;
    Ok(parsed.to_string())
}

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
