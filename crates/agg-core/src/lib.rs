//! # agg-core
//!
//! Core types shared by every crate of the aggregator toolchain.
//!
//! This crate provides:
//! - [`Record`]: an ordered, schema-free JSON object (tool, agent, or category)
//! - [`Collection`]: the three data collections and their file/export names
//! - [`CategoryTree`]: category and `category:subcategory` lookups
//! - [`ValidationMode`]: strict vs. lenient logo-file checks
//! - Cross-cutting error types

pub mod category;
pub mod collection;
pub mod errors;
pub mod mode;
pub mod record;

pub use category::CategoryTree;
pub use collection::Collection;
pub use errors::CoreError;
pub use mode::ValidationMode;
pub use record::{Record, records_from_value};

/// Canonical relative prefix of every logo reference.
pub const LOGO_PREFIX: &str = "images/logos/";

/// Category id marking AI agents, which never get a brand logo.
pub const AGENT_CATEGORY: &str = "ai-agents";
