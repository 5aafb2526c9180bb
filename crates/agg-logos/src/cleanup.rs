//! Listing and pruning of the logo directory.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use agg_core::Record;
use serde::Serialize;

use crate::error::LogoError;
use crate::naming::{is_placeholder, logo_basename, record_logo_filename};

/// Extensions recognised as logo images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub kept: Vec<String>,
    pub removed: Vec<String>,
    pub dry_run: bool,
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Image file names in `dir`, sorted. A missing directory has no logos.
///
/// # Errors
///
/// Returns [`LogoError::Io`] if the directory exists but cannot be read.
pub fn current_logos(dir: &Path) -> Result<Vec<String>, LogoError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LogoError::io(dir, e)),
    };

    let mut logos = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LogoError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() || !is_image(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            logos.push(name.to_string());
        }
    }
    logos.sort();
    Ok(logos)
}

/// Every logo file name some company may still resolve to.
///
/// The derived name of each company, the basename of each non-placeholder
/// reference, the placeholder itself, and the `keep` list.
pub fn needed_logos<'a>(
    companies: impl IntoIterator<Item = &'a Record>,
    placeholder: &str,
    keep: &[String],
) -> BTreeSet<String> {
    let mut needed: BTreeSet<String> = keep.iter().cloned().collect();
    needed.insert(placeholder.to_string());
    for company in companies {
        needed.insert(record_logo_filename(company));
        if let Some(reference) = company.logo().filter(|r| !is_placeholder(r)) {
            needed.insert(logo_basename(reference).to_string());
        }
    }
    needed
}

/// Delete every logo in `dir` that no company needs.
///
/// With `dry_run` nothing is deleted and `removed` lists what would be.
/// A failed deletion is logged and the file is reported as kept.
///
/// # Errors
///
/// Returns [`LogoError::Io`] if the directory cannot be listed.
pub fn cleanup_unused<'a>(
    dir: &Path,
    companies: impl IntoIterator<Item = &'a Record>,
    placeholder: &str,
    keep: &[String],
    dry_run: bool,
) -> Result<CleanupReport, LogoError> {
    let needed = needed_logos(companies, placeholder, keep);
    let mut report = CleanupReport {
        dry_run,
        ..CleanupReport::default()
    };

    for logo in current_logos(dir)? {
        if needed.contains(&logo) {
            report.kept.push(logo);
            continue;
        }
        if dry_run {
            tracing::info!(%logo, "would remove unused logo");
            report.removed.push(logo);
            continue;
        }
        match fs::remove_file(dir.join(&logo)) {
            Ok(()) => {
                tracing::info!(%logo, "removed unused logo");
                report.removed.push(logo);
            }
            Err(error) => {
                tracing::warn!(%logo, %error, "failed to remove unused logo");
                report.kept.push(logo);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"img").unwrap();
    }

    #[test]
    fn lists_only_images_sorted() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        for name in ["b.svg", "a.PNG", "notes.txt", "c.jpeg", "d.jpg"] {
            touch(temp.path(), name);
        }
        fs::create_dir(temp.path().join("nested.png")).unwrap();

        assert_eq!(
            current_logos(temp.path()).unwrap(),
            vec!["a.PNG", "b.svg", "c.jpeg", "d.jpg"]
        );
    }

    #[test]
    fn missing_directory_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        assert!(current_logos(&temp.path().join("absent")).unwrap().is_empty());
    }

    #[test]
    fn needed_set_includes_references_and_keep_list() {
        let companies = [
            Record::new()
                .with("id", "openai")
                .with("name", "OpenAI")
                .with("logo", "images/logos/openai-old.png"),
            Record::new()
                .with("id", "helper")
                .with("name", "Helper")
                .with("logo", "images/logos/placeholder.svg"),
        ];
        let keep = vec!["datadog.png".to_string()];

        let needed = needed_logos(&companies, "placeholder.svg", &keep);

        let expected: BTreeSet<String> = [
            "datadog.png",
            "helper.png",
            "openai-old.png",
            "openai.png",
            "placeholder.svg",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();
        assert_eq!(needed, expected);
    }

    #[test]
    fn dry_run_deletes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        touch(temp.path(), "stale.png");
        touch(temp.path(), "placeholder.svg");

        let report = cleanup_unused(temp.path(), &[] as &[Record], "placeholder.svg", &[], true).unwrap();

        assert_eq!(report.removed, vec!["stale.png"]);
        assert!(report.dry_run);
        assert!(temp.path().join("stale.png").exists());
    }
}
