//! REST API router configuration.

use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::{SearchResponse, SearchService};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// The search orchestrator
    pub search: SearchService,
}

/// Build the REST API router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let api = "/api/v1";

    Router::new()
        .route(&format!("{api}/health"), get(health))
        .route(&format!("{api}/products/search"), get(search_products))
        .with_state(state)
        .layer(cors)
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "timestamp": chrono::Utc::now() }))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Search the product catalog.
///
/// Absent or blank `q` answers `200` with an empty list; only a
/// failing catalog backend turns into an error response.
async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let products = state.search.search(params.q.as_deref()).await?;
    Ok(Json(SearchResponse { products }))
}
