//! Product records and the wire projection returned by search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vrt_search::SearchRecord;

/// A catalog product as stored by the storefront backend.
///
/// The search service treats this as read-only input; it never mutates
/// or persists products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier assigned by the catalog store
    pub id: String,
    /// Display name, free text
    pub name: String,
    /// SKU-like code, unique per product (e.g. "RV-W-001")
    pub code: String,
    /// Price in minor currency units
    pub price: u64,
    /// Optional category label ("Женское", "Унисекс", ...)
    #[serde(default)]
    pub category: Option<String>,
    /// Optional fit label ("Узкая", "Обычная", ...)
    #[serde(default)]
    pub fit: Option<String>,
    /// Creation time; snapshots are ordered newest first on this
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
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

/// The projection of a matched product returned to HTTP callers.
///
/// Deliberately drops `fit`, `created_at` and the internal relevance
/// score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// SKU-like code
    pub code: String,
    /// Price in minor currency units
    pub price: u64,
    /// Optional category label
    pub category: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            code: product.code.clone(),
            price: product.price,
            category: product.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "p1".into(),
            name: "Платье".into(),
            code: "RV-W-001".into(),
            price: 6800,
            category: Some("Женское".into()),
            fit: Some("Узкая".into()),
            created_at: None,
        }
    }

    #[test]
    fn test_summary_drops_fit() {
        let summary = ProductSummary::from(&product());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["code"], "RV-W-001");
        assert_eq!(json["price"], 6800);
        assert!(json.get("fit").is_none());
        assert!(json.get("score").is_none());
    }

    #[test]
    fn test_product_deserializes_backend_shape() {
        let json = r#"{
            "id": "p2",
            "name": "VRT SHIRT 001",
            "code": "RV-U-001",
            "price": 4200,
            "category": "Унисекс",
            "createdAt": "2026-01-15T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.code, "RV-U-001");
        assert!(product.fit.is_none());
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_search_record_fields() {
        let p = product();
        assert_eq!(SearchRecord::code(&p), "RV-W-001");
        assert_eq!(SearchRecord::category(&p), Some("Женское"));
    }
}
