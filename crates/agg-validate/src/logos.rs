//! Logo references must point at real files.

use std::fs;
use std::path::Path;

use agg_core::{Collection, Record, ValidationMode};
use agg_logos::naming::{is_placeholder, logo_basename};

use crate::fields::record_id;
use crate::violation::{Violation, ViolationKind};

/// Check that every non-placeholder logo of `records` names an existing,
/// non-empty file in `logo_dir`.
///
/// Findings are errors in [`ValidationMode::Strict`] and warnings in
/// [`ValidationMode::Lenient`].
#[must_use]
pub fn check_logo_files(
    collection: Collection,
    records: &[Record],
    logo_dir: &Path,
    mode: ValidationMode,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for record in records {
        let Some(reference) = record.logo().filter(|r| !is_placeholder(r)) else {
            continue;
        };
        let file = logo_basename(reference);
        let path = logo_dir.join(file);
        let id = record_id(record);

        let violation = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => continue,
            Ok(meta) if meta.is_file() => Violation::error(
                collection,
                &id,
                ViolationKind::EmptyLogo,
                format!("Logo file is empty: {file}"),
            ),
            _ => Violation::error(
                collection,
                &id,
                ViolationKind::MissingLogo,
                format!("Logo file not found: {file}"),
            ),
        };

        let violation = match mode {
            ValidationMode::Strict => violation,
            ValidationMode::Lenient => {
                tracing::warn!(%collection, record = %id, file, "logo file problem ignored in lenient mode");
                violation.downgraded()
            }
        };
        violations.push(violation);
    }
    violations
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::violation::Severity;

    fn with_logo(id: &str, logo: &str) -> Record {
        Record::new().with("id", id).with("logo", logo)
    }

    #[test]
    fn classifies_files() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        fs::write(temp.path().join("ok.png"), b"png").unwrap();
        fs::write(temp.path().join("empty.png"), b"").unwrap();
        let records = [
            with_logo("ok", "images/logos/ok.png"),
            with_logo("empty", "images/logos/empty.png"),
            with_logo("gone", "images/logos/gone.png"),
            with_logo("agent", "images/logos/placeholder.svg"),
            Record::new().with("id", "bare"),
        ];

        let violations =
            check_logo_files(Collection::Tools, &records, temp.path(), ValidationMode::Strict);

        let found: Vec<(&str, ViolationKind)> = violations
            .iter()
            .map(|v| (v.record_id.as_str(), v.kind))
            .collect();
        assert_eq!(
            found,
            vec![
                ("empty", ViolationKind::EmptyLogo),
                ("gone", ViolationKind::MissingLogo),
            ]
        );
        assert!(violations.iter().all(|v| v.severity == Severity::Error));
    }

    #[test]
    fn lenient_mode_downgrades() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let records = [with_logo("gone", "gone.png")];

        let violations =
            check_logo_files(Collection::Agents, &records, temp.path(), ValidationMode::Lenient);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
    }
}
