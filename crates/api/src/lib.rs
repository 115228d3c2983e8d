//! HTTP boundary for VRT storefront product search.
//!
//! This crate wires the pure scoring core (`vrt-search`) and the
//! catalog collaborator (`vrt-catalog`) into an axum service:
//!
//! - `GET /api/v1/products/search?q=…` — ranked product summaries
//! - `GET /api/v1/health` — liveness probe
//!
//! Blank queries are a defined "no search" input and answer `200` with
//! an empty list; a failing catalog backend answers `500` so callers
//! can tell "nothing matched" apart from "search is down".

mod config;
mod error;
mod routes;
mod service;
pub mod telemetry;

pub use config::{CatalogBackend, ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::{build_router, AppState};
pub use service::{SearchResponse, SearchService};
