//! Shared configuration constants for providerscrape
//!
//! Default values used by the config builder and the CLI so that running the
//! binary without flags reproduces the directory export as it has always run.

/// Detail endpoint of the Workforce Australia provider directory.
///
/// `{site_code}` and `{provider_type}` are substituted per provider. The
/// trailing `undefined` segment is part of the route the directory's own
/// frontend requests and must be kept.
pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://www.workforceaustralia.gov.au/api/v1/serviceproviders/providers/{site_code}/{provider_type}/undefined";

pub const SITE_CODE_PLACEHOLDER: &str = "{site_code}";
pub const PROVIDER_TYPE_PLACEHOLDER: &str = "{provider_type}";

pub const DEFAULT_INPUT_PATH: &str = "service_providers.json";
pub const DEFAULT_OUTPUT_PATH: &str = "service_providers_details.csv";

/// Sentinel written for any field the detail or summary does not carry.
pub const MISSING_FIELD: &str = "N/A";

/// Every row is tagged with this country unless configured otherwise.
pub const DEFAULT_COUNTRY: &str = "Australia";

/// Emit an aggregate progress line after this many written rows.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// Per-request timeout for detail fetches.
///
/// The directory API answers in well under a second; 30 seconds leaves room
/// for the occasional slow upstream without stalling the run indefinitely.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Chrome user agent string
///
/// The directory API sits behind a CDN that rejects obviously non-browser
/// clients, so requests identify as a current desktop Chrome.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
