//! Reading and writing a collection file.
//!
//! A collection file is a single top-level JSON array of objects. Writes are
//! plain overwrites: a crash mid-save can leave a truncated file.

use std::fs;
use std::path::Path;

use agg_core::Record;
use agg_core::record::records_from_value;

use crate::error::StoreError;

/// Read and parse a collection file.
///
/// # Errors
///
/// Returns [`StoreError`] if the file cannot be read, is not valid JSON, or
/// is not an array of objects.
pub fn try_load(path: &Path) -> Result<Vec<Record>, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    parse_records(&content)
}

/// Parse the text of a collection file.
///
/// # Errors
///
/// Returns [`StoreError::Json`] or [`StoreError::Shape`].
pub fn parse_records(content: &str) -> Result<Vec<Record>, StoreError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(records_from_value(value)?)
}

/// Read a collection file, treating any failure as an empty collection.
///
/// A missing file is normal on first run; every other failure is logged,
/// since a corrupted file silently becomes empty and the next save will
/// overwrite it.
#[must_use]
pub fn load(path: &Path) -> Vec<Record> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file does not exist; using empty collection");
        return Vec::new();
    }
    match try_load(path) {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "could not read data file; using empty collection");
            Vec::new()
        }
    }
}

/// Write records as pretty-printed JSON, creating the parent directory.
///
/// # Errors
///
/// Returns [`StoreError`] if serialization or the write fails.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let mut content = serde_json::to_string_pretty(records)?;
    content.push('\n');
    fs::write(path, content).map_err(|e| StoreError::io(path, e))
}
