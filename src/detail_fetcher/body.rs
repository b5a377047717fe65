//! Response body decoding
//!
//! The directory API normally answers with a JSON body. When the same route
//! is served as a rendered page (a browser JSON viewer, or a proxy that wraps
//! responses in HTML) the document sits as text inside a `<pre>` element.

use scraper::{Html, Selector};
use serde_json::Value;

use super::errors::FetchErrorKind;
use crate::provider_extractor::ProviderDetail;

/// Decode a detail body, falling back to the text of its first `<pre>` element
///
/// # Errors
///
/// Returns [`FetchErrorKind::InvalidJson`] when neither the body nor a `<pre>`
/// inside it is JSON, [`FetchErrorKind::EmptyDocument`] when the document
/// is `null` or `{}`, and [`FetchErrorKind::NotAnObject`] for any other
/// non-object document.
pub fn parse_detail_body(body: &str) -> Result<ProviderDetail, FetchErrorKind> {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(direct_err) => match pre_text(body) {
            Some(text) => serde_json::from_str::<Value>(&text)?,
            None => return Err(FetchErrorKind::InvalidJson(direct_err)),
        },
    };

    let detail = ProviderDetail::new(value);
    if detail.is_empty() {
        return Err(FetchErrorKind::EmptyDocument);
    }
    if !detail.is_object() {
        return Err(FetchErrorKind::NotAnObject);
    }
    Ok(detail)
}

fn pre_text(body: &str) -> Option<String> {
    let selector = Selector::parse("pre").ok()?;
    let document = Html::parse_document(body);
    document
        .select(&selector)
        .next()
        .map(|pre| pre.text().collect::<String>())
}
