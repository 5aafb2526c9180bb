//! Cross-cutting error types.
//!
//! Domain-specific errors (`StoreError`, `LogoError`, ...) live in their
//! respective crates. They converge into `anyhow` inside `agg-cli`.

use thiserror::Error;

/// Errors that can be raised by any aggregator crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A JSON value did not have the shape of a record or collection.
    #[error("Validation error: {0}")]
    Validation(String),
}
