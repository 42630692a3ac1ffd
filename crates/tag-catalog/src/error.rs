//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching or decoding the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network request failed.
    #[error("catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("catalog endpoint {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body is not a JSON array.
    #[error("failed to decode catalog: {0}")]
    Decode(String),

    /// Local catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
