//! Error types for the API client

use thiserror::Error;

use crate::resource::ResourceKind;

/// Client error.
///
/// Transport failures pass through uninterpreted; the read-only and
/// missing-identity rejections are detected locally before any I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Resource not found
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Save or delete attempted on a kind the server never mutates
    #[error("{0} resources cannot be saved or deleted")]
    ReadOnly(ResourceKind),

    /// Operation needs a server-assigned identity the instance lacks
    #[error("{0} has no server-assigned identity yet")]
    MissingId(ResourceKind),

    /// Spawned parent fetch aborted before completing
    #[error("parent fetch task failed: {0}")]
    ParentFetch(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;
