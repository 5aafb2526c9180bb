use agg_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// A data file exists but cannot be read as a collection.
    #[error("cannot load data: {0}")]
    Store(#[from] StoreError),
}
