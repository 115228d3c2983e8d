//! Product search scoring for the VRT storefront.
//!
//! This crate provides:
//! - Text normalization (trim + lowercase)
//! - Cyrillic-to-Latin transliteration
//! - Query variant expansion (whole query, words, transliterations)
//! - Weighted field scoring and stable ranking
//!
//! Everything here is pure computation over an in-memory snapshot:
//! no I/O, no shared state, no failure modes. Fetching the catalog is
//! the caller's job.

mod normalize;
mod score;
mod translit;
mod variants;

pub use normalize::{normalize, normalize_opt};
pub use score::{rank, score_record, weights, RESULT_LIMIT};
pub use translit::transliterate;
pub use variants::QueryVariants;

/// Search result with relevance score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}

/// Fields a catalog record exposes to the scorer.
///
/// `code` and `name` are always present on a product; `category` and
/// `fit` are optional free text. Implementations return the raw stored
/// values; the scorer normalizes internally.
pub trait SearchRecord {
    /// SKU-like product code, e.g. `"RV-W-001"`.
    fn code(&self) -> &str;
    /// Display name.
    fn name(&self) -> &str;
    /// Optional category label.
    fn category(&self) -> Option<&str>;
    /// Optional fit label.
    fn fit(&self) -> Option<&str>;
}
