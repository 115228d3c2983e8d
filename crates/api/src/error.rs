//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use vrt_catalog::CatalogError;

/// Errors surfaced by the search endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The catalog collaborator failed; distinct from "no results"
    #[error("catalog fetch failed: {0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the operation and cause; keep the wire message opaque.
        match &self {
            Self::Catalog(cause) => {
                error!(operation = "catalog_fetch", %cause, "search request failed");
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "product search is temporarily unavailable" })),
        )
            .into_response()
    }
}
