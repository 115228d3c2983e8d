//! vrt-server - Product search backend for the VRT storefront.
//!
//! Serves transliteration-aware product search over HTTP, backed by an
//! in-memory seed file or the storefront catalog backend.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vrt_api::{build_router, telemetry, AppState, CatalogBackend, SearchService, ServerConfig};
use vrt_catalog::{CatalogStore, HttpCatalog, HttpCatalogConfig, MemoryCatalog};

#[derive(Parser)]
#[command(name = "vrt-server")]
#[command(about = "Product search backend for the VRT storefront")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the bind address from the config
    #[arg(short, long)]
    bind: Option<String>,

    /// Seed the in-memory catalog from a JSON file
    #[arg(long, conflicts_with = "catalog_url")]
    seed: Option<String>,

    /// Fetch the catalog from the storefront backend at this base URL
    #[arg(long)]
    catalog_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn build_store(backend: &CatalogBackend) -> Result<Arc<dyn CatalogStore>> {
    let store: Arc<dyn CatalogStore> = match backend {
        CatalogBackend::Memory => Arc::new(MemoryCatalog::default()),
        CatalogBackend::Seed { path } => Arc::new(
            MemoryCatalog::from_seed_file(path)
                .with_context(|| format!("loading catalog seed from {path}"))?,
        ),
        CatalogBackend::Http { base_url } => Arc::new(
            HttpCatalog::new(HttpCatalogConfig::new(base_url))
                .context("building catalog HTTP client")?,
        ),
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(path) = cli.seed {
        config.catalog = CatalogBackend::Seed { path };
    } else if let Some(base_url) = cli.catalog_url {
        config.catalog = CatalogBackend::Http { base_url };
    }

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    telemetry::init(level)?;

    let store = build_store(&config.catalog)?;
    let state = AppState {
        search: SearchService::new(store),
    };
    let router = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "search server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
