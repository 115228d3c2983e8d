//! HTTP-backed catalog store.
//!
//! Thin client for the storefront backend's product listing endpoint,
//! used when the search service runs separately from the catalog
//! database.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{CatalogError, Result};
use crate::product::Product;
use crate::store::CatalogStore;

/// Configuration for [`HttpCatalog`].
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
    /// Base URL of the storefront backend, e.g. `http://catalog:3000`
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl HttpCatalogConfig {
    /// Config with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Wire shape of the backend's product listing response.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Catalog store backed by the storefront backend over HTTP.
///
/// The backend owns ordering: it returns the snapshot newest first,
/// and this client passes it through untouched.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    inner: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Build a client for the given backend.
    pub fn new(config: HttpCatalogConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("vrt-catalog/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { inner, base_url })
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}

#[async_trait]
impl CatalogStore for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.products_url()))]
    async fn all_products(&self) -> Result<Vec<Product>> {
        let response = self.inner.get(self.products_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Backend {
                status: status.as_u16(),
            });
        }

        let body: ProductsResponse = response.json().await?;
        debug!(count = body.products.len(), "fetched catalog snapshot");
        Ok(body.products)
    }
}
