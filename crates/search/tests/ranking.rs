//! End-to-end ranking scenarios over a realistic catalog snapshot.

use vrt_search::{rank, score_record, weights, QueryVariants, SearchRecord};

#[derive(Debug, Clone)]
struct Product {
    code: String,
    name: String,
    category: Option<String>,
    fit: Option<String>,
}

impl Product {
    fn new(code: &str, name: &str, category: &str, fit: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            category: Some(category.to_string()),
            fit: Some(fit.to_string()),
        }
    }
}

impl SearchRecord for Product {
    fn code(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    fn fit(&self) -> Option<&str> {
        self.fit.as_deref()
    }
}

/// Newest-first snapshot, as the catalog store supplies it.
fn snapshot() -> Vec<Product> {
    vec![
        Product::new("RV-W-001", "Платье", "Женское", "Узкая"),
        Product::new("RV-M-001", "Футболка классическая", "Мужское", "Обычная"),
    ]
}

#[test]
fn exact_name_match_returns_only_that_product() {
    let products = snapshot();
    let v = QueryVariants::build("платье");
    let ranked = rank(&products, &v);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].item.code, "RV-W-001");
    assert_eq!(ranked[0].score, weights::NAME_EXACT);
}

#[test]
fn code_fragment_matches_both_in_snapshot_order() {
    let products = snapshot();
    let v = QueryVariants::build("rv-");
    let ranked = rank(&products, &v);

    // Both codes contain "rv-"; equal scores keep newest-first order.
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item.code, "RV-W-001");
    assert_eq!(ranked[1].item.code, "RV-M-001");
    assert_eq!(ranked[0].score, ranked[1].score);
}

#[test]
fn cyrillic_query_reaches_latin_codes() {
    let products = vec![Product::new("RUS-1", "Jacket", "Outerwear", "Regular")];
    let v = QueryVariants::build("рус");
    let ranked = rank(&products, &v);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, weights::CODE_CONTAINS);
}

#[test]
fn cyrillic_and_latin_spellings_agree() {
    let products = snapshot();
    let cyr = rank(&products, &QueryVariants::build("рв-"));
    let lat = rank(&products, &QueryVariants::build("rv-"));

    let codes = |r: &[vrt_search::SearchResult<&Product>]| {
        r.iter().map(|m| m.item.code.clone()).collect::<Vec<_>>()
    };
    assert_eq!(codes(&cyr), codes(&lat));
}

#[test]
fn exact_code_outranks_name_substring() {
    let products = vec![
        Product::new("ZZ-1", "Shirt dress slim", "Женское", "Узкая"),
        Product::new("dress", "Пальто", "Женское", "Прямая"),
    ];
    let v = QueryVariants::build("dress");
    let ranked = rank(&products, &v);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item.code, "dress");
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn repeated_queries_are_idempotent() {
    let products = snapshot();
    let v = QueryVariants::build("футболка");

    let first: Vec<(String, u32)> = rank(&products, &v)
        .into_iter()
        .map(|m| (m.item.code.clone(), m.score))
        .collect();
    let second: Vec<(String, u32)> = rank(&products, &v)
        .into_iter()
        .map(|m| (m.item.code.clone(), m.score))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn empty_catalog_yields_empty_result() {
    let products: Vec<Product> = Vec::new();
    let ranked = rank(&products, &QueryVariants::build("платье"));
    assert!(ranked.is_empty());
}

#[test]
fn multi_word_query_matches_on_single_word() {
    let products = snapshot();
    let v = QueryVariants::build("классическая рубашка");
    let ranked = rank(&products, &v);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].item.code, "RV-M-001");
}

#[test]
fn every_ranked_product_scores_positive() {
    let v = QueryVariants::build("rv платье узкая");
    for m in rank(&snapshot(), &v) {
        assert!(m.score > 0);
        assert_eq!(m.score, score_record(m.item, &v));
    }
}
