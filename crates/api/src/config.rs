//! Server configuration loading.
//!
//! TOML file with defaults for every field, so the server runs with no
//! config at all (in-memory catalog, localhost bind).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration load errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Config file path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Config file path
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Which catalog collaborator backs the search service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CatalogBackend {
    /// In-memory catalog, optionally seeded from a JSON file
    #[default]
    Memory,
    /// JSON seed file loaded into memory at startup
    Seed {
        /// Path to the seed file
        path: String,
    },
    /// Storefront backend over HTTP
    Http {
        /// Base URL of the backend
        base_url: String,
    },
}

/// Root server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:8080"
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// CORS origins allowed to call the API
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Catalog backend selection
    #[serde(default)]
    pub catalog: CatalogBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origins: default_allowed_origins(),
            log_level: default_log_level(),
            catalog: CatalogBackend::default(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from a file path, or defaults when `None`.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(Path::new(path)).map_err(|source| ConfigError::Read {
                path: path.to_string(),
                source,
            })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
