//! Comparison of logo files on disk with what the data expects.

use std::collections::BTreeSet;
use std::path::Path;

use agg_core::Record;
use serde::Serialize;

use crate::cleanup::current_logos;
use crate::error::LogoError;
use crate::naming::{logo_basename, record_logo_filename};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyLogo {
    pub company: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub files_on_disk: usize,
    pub companies: usize,
    /// Referenced logo present on disk.
    pub with_logo: Vec<CompanyLogo>,
    /// Referenced logo absent from disk.
    pub missing: Vec<CompanyLogo>,
    /// No `logo` field; `logo` holds the name it would derive.
    pub without_field: Vec<CompanyLogo>,
    /// Files nobody references, placeholder excluded.
    pub unused: Vec<String>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.without_field.is_empty()
    }
}

/// Audit `companies` against the logo files in `dir`.
///
/// # Errors
///
/// Returns [`LogoError::Io`] if the directory cannot be listed.
pub fn audit<'a>(
    dir: &Path,
    companies: impl IntoIterator<Item = &'a Record>,
    placeholder: &str,
) -> Result<AuditReport, LogoError> {
    let on_disk = current_logos(dir)?;
    let present: BTreeSet<&str> = on_disk.iter().map(String::as_str).collect();
    let mut referenced = BTreeSet::new();
    let mut report = AuditReport {
        files_on_disk: on_disk.len(),
        ..AuditReport::default()
    };

    for company in companies {
        report.companies += 1;
        let name = company
            .name()
            .map_or_else(|| company.label(), str::to_string);
        match company.logo() {
            None => report.without_field.push(CompanyLogo {
                company: name,
                logo: record_logo_filename(company),
            }),
            Some(reference) => {
                let file = logo_basename(reference).to_string();
                referenced.insert(file.clone());
                let entry = CompanyLogo {
                    company: name,
                    logo: file,
                };
                if present.contains(entry.logo.as_str()) {
                    report.with_logo.push(entry);
                } else {
                    report.missing.push(entry);
                }
            }
        }
    }

    report.unused = on_disk
        .iter()
        .filter(|file| !referenced.contains(*file) && file.as_str() != placeholder)
        .cloned()
        .collect();

    Ok(report)
}
