//! Bulk fixes of the `logo` field.

use agg_core::Record;
use serde::Serialize;

use crate::naming::{logo_reference, normalize_logo_path, record_logo_filename};

/// A rewritten logo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathFix {
    pub company: String,
    pub before: String,
    pub after: String,
}

/// Give every record without a logo the reference of its derived file name.
///
/// Returns how many records were changed.
pub fn ensure_logo_fields(records: &mut [Record]) -> usize {
    let mut added = 0;
    for record in records.iter_mut().filter(|r| r.logo().is_none()) {
        let reference = logo_reference(&record_logo_filename(record));
        tracing::debug!(company = %record.label(), %reference, "adding logo field");
        record.set_logo(reference);
        added += 1;
    }
    added
}

/// Normalize every logo reference, returning the ones that changed.
///
/// An empty reference is pointed at `placeholder`; a missing field is left
/// alone.
pub fn fix_logo_paths(records: &mut [Record], placeholder: &str) -> Vec<PathFix> {
    let mut fixes = Vec::new();
    for record in records.iter_mut() {
        let Some(before) = record.str_field("logo").map(str::to_string) else {
            continue;
        };
        let after = normalize_logo_path(&before, placeholder);
        if after != before {
            tracing::debug!(company = %record.label(), %before, %after, "normalized logo path");
            record.set_logo(after.clone());
            fixes.push(PathFix {
                company: record.label(),
                before,
                after,
            });
        }
    }
    fixes
}
