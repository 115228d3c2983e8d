//! Product catalog for the VRT storefront.
//!
//! This crate provides:
//! - The `Product` record and the `ProductSummary` projection the
//!   search endpoint returns
//! - The `CatalogStore` collaborator trait (full snapshot, newest
//!   first)
//! - An in-memory store seedable from JSON (dev, demo, tests)
//! - An HTTP-backed store for deployments where the catalog lives
//!   behind the storefront backend

mod error;
mod http;
mod product;
mod store;

pub use error::{CatalogError, Result};
pub use http::{HttpCatalog, HttpCatalogConfig};
pub use product::{Product, ProductSummary};
pub use store::{CatalogStore, MemoryCatalog};
