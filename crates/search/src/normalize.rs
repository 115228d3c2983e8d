//! Canonical comparison form for query and catalog text.

/// Normalize a string for comparison: trim surrounding whitespace and
/// lowercase.
///
/// Pure and total; empty or whitespace-only input yields an empty
/// string.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalize an optional string, treating `None` as empty.
///
/// Catalog fields like `category` and `fit` are optional; this gives
/// them the same empty-string fallback the scorer expects.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
