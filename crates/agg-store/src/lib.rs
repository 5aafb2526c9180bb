//! # agg-store
//!
//! Persistence for the aggregator's record collections.
//!
//! - [`DataStore`]: one JSON file per [`Collection`](agg_core::Collection)
//! - [`merge`]: merge-by-id of fetched records into existing ones
//! - [`legacy`]: `export const` JS modules, rendered as bindings for the web
//!   layer and parsed for one-time imports of old data files
//!
//! Each pipeline step reads a whole file, mutates it in memory, and
//! overwrites it. There is no locking; a single writer is assumed.

pub mod json;
pub mod legacy;

mod error;
mod merge;
mod store;

pub use error::StoreError;
pub use merge::merge;
pub use store::{DataStore, Dataset};
