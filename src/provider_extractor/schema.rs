use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::json_path::{lookup_text, scalar_text};

/// Column order of the output table.
pub const OUTPUT_COLUMNS: [&str; 13] = [
    "name",
    "website",
    "site_information",
    "phone_number",
    "email",
    "address",
    "city",
    "state",
    "country",
    "postal_code",
    "latitude",
    "longitude",
    "institution_location",
];

/// Top-level shape of the input file: `{"results": [{"result": {...}}, ...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SummaryDocument {
    #[serde(default)]
    pub results: Vec<SummaryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SummaryEntry {
    #[serde(default)]
    pub result: Option<ProviderSummary>,
}

/// One provider from the search results list.
///
/// Scalars are kept as raw JSON so a numeric postcode or coordinate is
/// accepted alongside the usual strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSummary {
    pub site_code: Option<Value>,
    pub provider_type: Option<Value>,
    pub suburb: Option<Value>,
    pub state: Option<Value>,
    pub postcode: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

impl ProviderSummary {
    /// Site code, `None` when absent or empty
    #[must_use]
    pub fn site_code(&self) -> Option<String> {
        non_empty(self.site_code.as_ref())
    }

    /// Provider-type code, `None` when absent or empty
    #[must_use]
    pub fn provider_type(&self) -> Option<String> {
        non_empty(self.provider_type.as_ref())
    }

    /// Both identifiers, or `None` if either is missing
    #[must_use]
    pub fn identifiers(&self) -> Option<(String, String)> {
        Some((self.site_code()?, self.provider_type()?))
    }

    pub(crate) fn text(field: Option<&Value>) -> Option<String> {
        field.and_then(scalar_text)
    }
}

fn non_empty(field: Option<&Value>) -> Option<String> {
    ProviderSummary::text(field).filter(|s| !s.is_empty())
}

/// Raw detail document for one provider.
///
/// Expected to hold `siteData`, `contactData` and `socialLinksData` mappings,
/// though any of them, or any key within them, may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderDetail(pub Value);

impl ProviderDetail {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn site_data(&self, key: &str) -> Option<String> {
        lookup_text(&self.0, &["siteData", key])
    }

    #[must_use]
    pub fn contact_data(&self, key: &str) -> Option<String> {
        lookup_text(&self.0, &["contactData", key])
    }

    #[must_use]
    pub fn social_links(&self, key: &str) -> Option<String> {
        lookup_text(&self.0, &["socialLinksData", key])
    }

    /// `null` and `{}` carry nothing worth a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Location sub-object embedded as JSON text in `institution_location`.
///
/// Field order here is the key order of the encoded object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionLocation {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: String,
    pub long: String,
    pub postal_code: String,
}

/// One output row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatOutputRecord {
    pub name: String,
    pub website: String,
    pub site_information: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: String,
    pub longitude: String,
    pub institution_location: String,
}

impl FlatOutputRecord {
    /// Decode the embedded location object
    ///
    /// # Errors
    ///
    /// Returns an error if `institution_location` is not valid JSON for an
    /// [`InstitutionLocation`].
    pub fn location(&self) -> serde_json::Result<InstitutionLocation> {
        serde_json::from_str(&self.institution_location)
    }
}
