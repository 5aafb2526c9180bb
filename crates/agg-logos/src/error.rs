//! Logo pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving or managing logo files.
///
/// Provider-level failures (`Http`, `Status`, `EmptyBody`) are recovered by
/// trying the next provider; they only surface in logs.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Provider answered with an empty body.
    #[error("downloaded file is empty ({url})")]
    EmptyBody { url: String },

    /// A provider URL template cannot be used.
    #[error("invalid provider template '{0}': missing {{domain}}")]
    InvalidTemplate(String),
}

impl LogoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
