//! Catalog store trait and the in-memory implementation.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// External collaborator supplying the product snapshot.
///
/// The contract mirrors the storefront backend: the full catalog,
/// ordered by descending creation time. The search side never filters
/// or paginates at the source; it receives everything and ranks
/// itself. Each search call re-fetches — no caching between calls.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch the full product snapshot, newest first.
    async fn all_products(&self) -> Result<Vec<Product>>;
}

/// In-memory catalog snapshot for development, demos and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    /// Build a catalog from a list of products, sorting newest first.
    ///
    /// Products without a `created_at` sort last; within equal
    /// timestamps the given order is kept.
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { products }
    }

    /// Load a catalog from a JSON seed file (an array of products in
    /// the backend's wire shape).
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Seed {
            path: path.display().to_string(),
            source,
        })?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = products.len(), "loaded catalog seed");
        Ok(Self::new(products))
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}
