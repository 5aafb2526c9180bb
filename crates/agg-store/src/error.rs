//! Data store error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed, but its content is not an array of records.
    #[error("invalid data: {0}")]
    Shape(#[from] agg_core::CoreError),

    /// A legacy JS module has no `[ ... ]` array literal.
    #[error("no array literal found in {0}")]
    MissingArray(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
