//! Default-substituting lookups into loosely shaped JSON documents
//!
//! Provider details come back with any level of nesting missing: the parent
//! mapping may be absent, may be `null`, or may lack the key. All of those
//! resolve to "no value" here so callers pick a single default.

use serde_json::Value;

/// Walk `path` through nested objects and return the scalar at the end as text.
///
/// Strings are returned as-is; numbers and booleans are rendered with their
/// JSON text. Returns `None` when any segment is missing, when an intermediate
/// value is not an object, or when the final value is `null`, an array or an
/// object.
///
/// # Examples
/// ```
/// # use providerscrape::utils::json_path::lookup_text;
/// let doc = serde_json::json!({"siteData": {"name": "Acme", "suite": 4}});
/// assert_eq!(lookup_text(&doc, &["siteData", "name"]).as_deref(), Some("Acme"));
/// assert_eq!(lookup_text(&doc, &["siteData", "suite"]).as_deref(), Some("4"));
/// assert_eq!(lookup_text(&doc, &["contactData", "phone"]), None);
/// ```
#[must_use]
pub fn lookup_text(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    scalar_text(current)
}

/// Like [`lookup_text`] but substitutes `default` for a missing value.
#[must_use]
pub fn text_or(value: &Value, path: &[&str], default: &str) -> String {
    lookup_text(value, path).unwrap_or_else(|| default.to_string())
}

/// Render a scalar JSON value as text, `None` for null and containers.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
