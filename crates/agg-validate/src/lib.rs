//! # agg-validate
//!
//! Checks the aggregator collections before a site build:
//!
//! - field allow-lists per collection ([`validate_record`])
//! - category and subcategory references ([`validate_integrity`])
//! - logo references naming real, non-empty files ([`check_logo_files`])
//! - repeated ids ([`find_duplicate_ids`], warnings only)
//!
//! Findings are accumulated into a [`ValidationReport`]; nothing
//! short-circuits. A report with any error is not valid.

mod error;
mod fields;
mod integrity;
mod logos;
mod report;
mod schema;
mod violation;

pub use error::ValidateError;
pub use fields::{is_truthy, validate_record};
pub use integrity::{find_duplicate_ids, validate_integrity};
pub use logos::check_logo_files;
pub use report::{CollectionCount, ValidationReport, validate_dataset, validate_store};
pub use schema::{Schema, schema_for};
pub use violation::{Severity, Violation, ViolationKind};
