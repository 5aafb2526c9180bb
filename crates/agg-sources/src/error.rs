//! Data-source error types.

use agg_core::Collection;
use agg_store::StoreError;
use thiserror::Error;

/// Errors that can occur when refreshing collections from a remote source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Source API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the source.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Response body is not a JSON array of objects.
    #[error("parse error: {0}")]
    Parse(String),

    /// The source returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No endpoint is configured for the collection.
    #[error("no endpoint configured for {0}")]
    NotConfigured(Collection),

    /// Persisting the merged collection failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
