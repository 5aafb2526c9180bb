//! Fetch → merge → save for one collection.

use agg_core::{Collection, Record};
use agg_store::{DataStore, merge};
use serde::Serialize;

use crate::error::SourceError;
use crate::source::DataSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub collection: Collection,
    pub existing: usize,
    pub fetched: usize,
    pub total: usize,
}

/// Fetch `collection`, degrading any failure to an empty result.
///
/// An empty result merges as a no-op, so the data already on disk is kept.
pub async fn fetch_or_empty<S: DataSource>(source: &S, collection: Collection) -> Vec<Record> {
    source.fetch(collection).await.unwrap_or_else(|e| {
        tracing::warn!(source = source.name(), %collection, %e, "fetch failed, keeping existing data");
        Vec::new()
    })
}

/// Refresh one collection file in `store` from `source`.
///
/// # Errors
///
/// Returns [`SourceError::Store`] if the merged collection cannot be
/// written. Fetch failures are logged, not returned.
pub async fn refresh_collection<S: DataSource>(
    store: &DataStore,
    source: &S,
    collection: Collection,
) -> Result<RefreshSummary, SourceError> {
    let existing = store.load(collection);
    tracing::info!(%collection, count = existing.len(), "existing records");
    let existing_count = existing.len();

    let fetched = fetch_or_empty(source, collection).await;
    let fetched_count = fetched.len();
    tracing::info!(%collection, count = fetched_count, "fetched records");

    let merged = merge(existing, fetched);
    store.save(collection, &merged)?;
    tracing::info!(%collection, count = merged.len(), "updated collection");

    Ok(RefreshSummary {
        collection,
        existing: existing_count,
        fetched: fetched_count,
        total: merged.len(),
    })
}
