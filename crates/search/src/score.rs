//! Weighted field scoring and ranking.

use crate::{normalize, normalize_opt, QueryVariants, SearchRecord, SearchResult};

/// Maximum number of ranked results returned to callers.
pub const RESULT_LIMIT: usize = 15;

/// Scoring weights.
///
/// These are tuned heuristics carried over from the storefront's
/// original ranking, not invariants; keep them in one place so a
/// retune touches nothing else. Codes weigh heaviest because a
/// SKU-like code is the least ambiguous thing a shopper can type;
/// short name fragments weigh less because they match incidentally
/// inside unrelated words.
pub mod weights {
    /// Normalized code equals the variant.
    pub const CODE_EXACT: u32 = 12;
    /// Normalized code contains the variant (and is not equal).
    pub const CODE_CONTAINS: u32 = 8;
    /// Normalized name equals the variant.
    pub const NAME_EXACT: u32 = 10;
    /// Name contains a variant longer than [`SHORT_VARIANT_LEN`] chars.
    pub const NAME_CONTAINS_LONG: u32 = 6;
    /// Name contains a variant of [`SHORT_VARIANT_LEN`] chars or fewer.
    pub const NAME_CONTAINS_SHORT: u32 = 4;
    /// Category contains the variant.
    pub const CATEGORY_CONTAINS: u32 = 3;
    /// Fit contains the variant.
    pub const FIT_CONTAINS: u32 = 2;
    /// Character-count threshold separating short from long variants.
    pub const SHORT_VARIANT_LEN: usize = 3;
}

/// Score one record against the full variant set.
///
/// All four fields are tested for every variant and the points are
/// summed — a variant that is both an exact code match and a category
/// substring contributes from both rules. Returns 0 when nothing
/// matches.
pub fn score_record<R: SearchRecord>(record: &R, variants: &QueryVariants) -> u32 {
    let code = normalize(record.code());
    let name = normalize(record.name());
    let category = normalize_opt(record.category());
    let fit = normalize_opt(record.fit());

    let mut score = 0;
    for variant in variants.iter() {
        if variant.is_empty() {
            continue;
        }

        if code == variant {
            score += weights::CODE_EXACT;
        } else if code.contains(variant) {
            score += weights::CODE_CONTAINS;
        }

        if name == variant {
            score += weights::NAME_EXACT;
        } else if name.contains(variant) {
            score += if variant.chars().count() > weights::SHORT_VARIANT_LEN {
                weights::NAME_CONTAINS_LONG
            } else {
                weights::NAME_CONTAINS_SHORT
            };
        }

        if category.contains(variant) {
            score += weights::CATEGORY_CONTAINS;
        }

        if fit.contains(variant) {
            score += weights::FIT_CONTAINS;
        }
    }

    score
}

/// Rank a catalog snapshot against a variant set.
///
/// Keeps only records with a positive score, sorts by descending score
/// with ties preserving the snapshot's relative order, and truncates
/// to [`RESULT_LIMIT`]. The snapshot order is the caller's tie-break
/// contract (the storefront supplies newest-first).
pub fn rank<'a, R: SearchRecord>(
    records: &'a [R],
    variants: &QueryVariants,
) -> Vec<SearchResult<&'a R>> {
    if variants.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<SearchResult<&R>> = records
        .iter()
        .map(|record| SearchResult {
            item: record,
            score: score_record(record, variants),
        })
        .filter(|result| result.score > 0)
        .collect();

    // sort_by is stable, so equal scores keep snapshot order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(RESULT_LIMIT);

    tracing::debug!(
        candidates = records.len(),
        variants = variants.len(),
        matches = scored.len(),
        "ranked catalog snapshot"
    );

    scored
}
