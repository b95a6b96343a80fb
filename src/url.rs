//! URL classification and decomposition helpers.
//!
//! Thin wrappers over the [`url`] crate plus a cached regex for the common
//! "is this an http(s) link" check. All of these are silent/defaulting:
//! unparseable input yields `false` or an empty string, never an error.

use std::sync::LazyLock;

use regex::Regex;

static HTTP_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("hardcoded pattern is valid"));

/// Returns `true` iff `input` starts with `http://` or `https://`.
#[must_use]
pub fn is_http_url(input: &str) -> bool {
    HTTP_URL_PATTERN.is_match(input)
}

/// Scheme plus authority of a URL, e.g. `"https://example.com:8080"`.
///
/// The explicit port is preserved when present. URLs without an authority
/// (`mailto:`, `data:`, …) yield just `"<scheme>:"`. Empty or unparseable
/// input yields an empty string.
#[must_use]
pub fn url_get_host(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let Ok(parsed) = ::url::Url::parse(input) else {
        return String::new();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}://{host}:{port}", parsed.scheme()),
        (Some(host), None) => format!("{}://{host}", parsed.scheme()),
        (None, _) => format!("{}:", parsed.scheme()),
    }
}

/// Hostname of a URL, without scheme or port. Empty or unparseable input
/// yields an empty string.
#[must_use]
pub fn url_get_hostname(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    ::url::Url::parse(input)
        .ok()
        .and_then(|parsed| parsed.host_str().map(ToString::to_string))
        .unwrap_or_default()
}
