use crate::regex::Regex;
use std::sync::LazyLock;

static CITATION_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Citation Key:\s*(\S+)").unwrap());

/// Finds the first `Citation Key: <token>` marker in free text.
///
/// Whitespace is Unicode-aware with the `regex` feature and ASCII-only with
/// `lite`, so a non-breaking space after the colon ends up inside the key when
/// built with `lite`.
///
/// # Arguments
///
/// * `extra` - The record's extra field
pub fn extract_citation_key(extra: &str) -> Option<&str> {
    CITATION_KEY_REGEX
        .captures(extra)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
