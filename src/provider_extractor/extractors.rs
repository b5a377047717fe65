//! Flattening of provider summaries and details into output rows
//!
//! Every lookup goes through the same default rule: a missing mapping, a
//! missing key and a `null` value all become [`MISSING_FIELD`].

use super::schema::{FlatOutputRecord, InstitutionLocation, ProviderDetail, ProviderSummary};
use crate::utils::constants::{DEFAULT_COUNTRY, MISSING_FIELD};

/// Fallback clause used when a provider lists no specialisation.
const ALL_JOB_SEEKERS: &str = "all job seekers";

/// Flattens summary/detail pairs into [`FlatOutputRecord`]s.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    country: String,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

impl FieldExtractor {
    #[must_use]
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Build the output row for one provider. Never fails.
    #[must_use]
    pub fn extract(&self, summary: &ProviderSummary, detail: &ProviderDetail) -> FlatOutputRecord {
        let or_missing = |v: Option<String>| v.unwrap_or_else(|| MISSING_FIELD.to_string());

        let name = or_missing(detail.site_data("name"));
        let website = or_missing(detail.social_links("website"));
        let site_information = site_information(
            &or_missing(detail.site_data("service")),
            detail.site_data("specialisation").as_deref().unwrap_or(""),
        );
        let phone_number = or_missing(detail.contact_data("phone"));
        let email = or_missing(detail.contact_data("email"));
        let address = join_address(
            &or_missing(detail.site_data("addressLine1")),
            &or_missing(detail.site_data("addressLine2")),
        );

        let city = or_missing(ProviderSummary::text(summary.suburb.as_ref()));
        let state = or_missing(ProviderSummary::text(summary.state.as_ref()));
        let postal_code = or_missing(ProviderSummary::text(summary.postcode.as_ref()));
        let latitude = or_missing(ProviderSummary::text(summary.latitude.as_ref()));
        let longitude = or_missing(ProviderSummary::text(summary.longitude.as_ref()));
        let country = self.country.clone();

        let location = InstitutionLocation {
            address: address.clone(),
            city: city.clone(),
            state: state.clone(),
            country: country.clone(),
            lat: latitude.clone(),
            long: longitude.clone(),
            postal_code: postal_code.clone(),
        };

        FlatOutputRecord {
            name,
            website,
            site_information,
            phone_number,
            email,
            address,
            city,
            state,
            country,
            postal_code,
            latitude,
            longitude,
            institution_location: encode_location(&location),
        }
    }
}

/// Flatten with the default country.
#[must_use]
pub fn extract(summary: &ProviderSummary, detail: &ProviderDetail) -> FlatOutputRecord {
    FieldExtractor::default().extract(summary, detail)
}

fn site_information(service: &str, specialisation: &str) -> String {
    let specialisation = if specialisation.is_empty() {
        ALL_JOB_SEEKERS
    } else {
        specialisation
    };
    format!("We service {service} and we specialise in {specialisation}.")
}

fn join_address(line1: &str, line2: &str) -> String {
    format!("{line1} {line2}").trim().to_string()
}

fn encode_location(location: &InstitutionLocation) -> String {
    // A struct of plain strings always serializes.
    serde_json::to_string(location).unwrap_or_default()
}
