//! Whole-dataset validation.

use std::io::ErrorKind;
use std::path::Path;

use agg_core::{CategoryTree, Collection, Record, ValidationMode};
use agg_store::{DataStore, Dataset, StoreError};
use serde::Serialize;

use crate::error::ValidateError;
use crate::fields::validate_record;
use crate::integrity::{find_duplicate_ids, validate_integrity};
use crate::logos::check_logo_files;
use crate::violation::{Severity, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionCount {
    pub collection: Collection,
    pub records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub mode: ValidationMode,
    pub collections: Vec<CollectionCount>,
    pub records_checked: usize,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn extend(&mut self, violations: Vec<Violation>) {
        for violation in violations {
            match violation.severity {
                Severity::Error => self.errors.push(violation),
                Severity::Warning => self.warnings.push(violation),
            }
        }
    }
}

/// Run every check over an in-memory dataset.
#[must_use]
pub fn validate_dataset(dataset: &Dataset, logo_dir: &Path, mode: ValidationMode) -> ValidationReport {
    let mut report = ValidationReport {
        mode,
        collections: Vec::new(),
        records_checked: 0,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    for collection in Collection::ALL {
        let records = dataset.get(collection);
        report.collections.push(CollectionCount {
            collection,
            records: records.len(),
        });
        report.records_checked += records.len();
        for record in records {
            report.extend(validate_record(record, collection));
        }
        report.extend(find_duplicate_ids(collection, records));
    }

    let tree = CategoryTree::from_records(&dataset.categories);
    report.extend(validate_integrity(&dataset.tools, &dataset.agents, &tree));

    for collection in Collection::COMPANIES {
        report.extend(check_logo_files(
            collection,
            dataset.get(collection),
            logo_dir,
            mode,
        ));
    }

    tracing::info!(
        records = report.records_checked,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );
    report
}

fn load_for_validation(store: &DataStore, collection: Collection) -> Result<Vec<Record>, StoreError> {
    match store.try_load(collection) {
        Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::warn!(%collection, "data file not found, validating as empty");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Load every collection from `store` and validate it.
///
/// A missing data file validates as an empty collection.
///
/// # Errors
///
/// Returns [`ValidateError::Store`] if a data file exists but is
/// unreadable or malformed; it must not pass as empty.
pub fn validate_store(
    store: &DataStore,
    logo_dir: &Path,
    mode: ValidationMode,
) -> Result<ValidationReport, ValidateError> {
    let dataset = Dataset {
        tools: load_for_validation(store, Collection::Tools)?,
        categories: load_for_validation(store, Collection::Categories)?,
        agents: load_for_validation(store, Collection::Agents)?,
    };
    Ok(validate_dataset(&dataset, logo_dir, mode))
}
