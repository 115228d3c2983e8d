//! Query variant expansion.

use crate::{normalize, transliterate};

/// The set of normalized string forms derived from one raw query.
///
/// Contains the whole normalized query, its transliteration, and both
/// forms of every whitespace-delimited word, deduplicated. A
/// multi-word query therefore matches on any individual word, and a
/// Cyrillic query matches Latin-script product codes.
///
/// Built fresh per search call and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryVariants(Vec<String>);

impl QueryVariants {
    /// Expand a raw query into its variant set.
    ///
    /// Returns an empty set when the query is empty or whitespace-only,
    /// which callers treat as "no search".
    pub fn build(raw_query: &str) -> Self {
        let normalized = normalize(raw_query);
        if normalized.is_empty() {
            return Self::default();
        }

        let mut variants = Self::default();
        variants.push(normalized.clone());
        variants.push(transliterate(&normalized));

        for word in normalized.split_whitespace() {
            variants.push(word.to_string());
            variants.push(transliterate(word));
        }

        variants
    }

    // Set semantics: skip empties and exact-string repeats. The set is
    // small (2 + 2 per word), so a linear scan beats hashing.
    fn push(&mut self, candidate: String) {
        let trimmed = candidate.trim();
        if trimmed.is_empty() || self.0.iter().any(|v| v == trimmed) {
            return;
        }
        if trimmed.len() == candidate.len() {
            self.0.push(candidate);
        } else {
            self.0.push(trimmed.to_string());
        }
    }

    /// True when no usable variant was derived.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct variants.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the variants in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(v: &QueryVariants, s: &str) -> bool {
        v.iter().any(|x| x == s)
    }

    #[test]
    fn test_blank_query_yields_empty_set() {
        assert!(QueryVariants::build("").is_empty());
        assert!(QueryVariants::build("   \t").is_empty());
    }

    #[test]
    fn test_single_word_query() {
        let v = QueryVariants::build("  Рюс ");
        assert!(contains(&v, "рюс"));
        assert!(contains(&v, "ryus"));
        // whole query == only word, so just the two forms
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_latin_query_dedupes_transliteration() {
        // Transliteration of pure Latin text is the identity.
        let v = QueryVariants::build("shirt");
        assert_eq!(v.len(), 1);
        assert!(contains(&v, "shirt"));
    }

    #[test]
    fn test_multi_word_query_adds_word_variants() {
        let v = QueryVariants::build("футболка белая");
        assert!(contains(&v, "футболка белая"));
        assert!(contains(&v, "futbolka belaya"));
        assert!(contains(&v, "футболка"));
        assert!(contains(&v, "futbolka"));
        assert!(contains(&v, "белая"));
        assert!(contains(&v, "belaya"));
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn test_repeated_words_dedupe() {
        let v = QueryVariants::build("rus rus");
        assert!(contains(&v, "rus rus"));
        assert!(contains(&v, "rus"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_non_blank_query_never_empty() {
        assert!(!QueryVariants::build("a").is_empty());
        assert!(!QueryVariants::build(" ё ").is_empty());
    }
}
