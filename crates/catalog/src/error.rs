//! Error types for catalog access.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while fetching the catalog snapshot.
///
/// Callers must be able to tell "the catalog backend is down" apart
/// from "nothing matched", so fetch failures are errors, never empty
/// snapshots.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request to the catalog backend failed
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog backend answered with a non-success status
    #[error("catalog backend returned status {status}")]
    Backend {
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be decoded
    #[error("invalid catalog payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Seed file could not be read
    #[error("failed to read catalog seed {path}: {source}")]
    Seed {
        /// Seed file path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
