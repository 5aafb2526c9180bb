//! # agg-sources
//!
//! Remote data sources for the aggregator collections.
//!
//! A [`DataSource`] yields fresh records per [`Collection`](agg_core::Collection).
//! [`refresh_collection`] merges them into the local store by id. Source
//! failures never lose data: they are logged and treated as an empty fetch.
//!
//! - [`HttpSource`]: one JSON endpoint per collection, optional bearer token
//! - [`DisabledSource`]: makes no requests, used when API calls are off

mod error;
mod http;
mod refresh;
mod source;

pub use error::SourceError;
pub use http::parse_records;
pub use refresh::{RefreshSummary, fetch_or_empty, refresh_collection};
pub use source::{DataSource, DisabledSource, HttpSource};
