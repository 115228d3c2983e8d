//! Search orchestration: query in, ranked summaries out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use vrt_catalog::{CatalogStore, ProductSummary, Result as CatalogResult};
use vrt_search::{rank, QueryVariants};

/// Response body of the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked product summaries, at most [`vrt_search::RESULT_LIMIT`]
    pub products: Vec<ProductSummary>,
}

/// End-to-end search over a catalog collaborator.
///
/// Stateless apart from the store handle: every call re-fetches the
/// snapshot, ranks it and projects the winners. Concurrent calls are
/// independent.
#[derive(Clone)]
pub struct SearchService {
    catalog: Arc<dyn CatalogStore>,
}

impl SearchService {
    /// Build a service over the given catalog store.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Run one search.
    ///
    /// Absent or blank queries short-circuit to an empty result
    /// without touching the catalog. Catalog failures propagate as
    /// errors; an empty result always means "nothing matched".
    #[instrument(skip(self), fields(query = query.unwrap_or("")))]
    pub async fn search(&self, query: Option<&str>) -> CatalogResult<Vec<ProductSummary>> {
        let Some(raw_query) = query else {
            return Ok(Vec::new());
        };

        let variants = QueryVariants::build(raw_query);
        if variants.is_empty() {
            debug!("blank query, skipping catalog fetch");
            return Ok(Vec::new());
        }

        let snapshot = self.catalog.all_products().await?;
        let summaries = rank(&snapshot, &variants)
            .into_iter()
            .map(|matched| ProductSummary::from(matched.item))
            .collect();

        Ok(summaries)
    }
}
