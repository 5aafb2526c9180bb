//! The JS module container used by the web layer.
//!
//! Data used to live directly in files of the form
//!
//! ```text
//! // This file is auto-generated - do not edit directly
//! export const tools = [ ... ];
//! ```
//!
//! The JSON store is now canonical. This module renders those files as
//! generated bindings and can still read old ones for a one-time import.
//! Reading assumes exactly one top-level array literal and no other bracket
//! characters around it.

use std::fs;
use std::path::Path;

use agg_core::Record;
use serde::Serialize;

use crate::error::StoreError;
use crate::json;

/// Header line written at the top of every generated module.
pub const GENERATED_HEADER: &str = "// This file is auto-generated - do not edit directly";

/// Substring between the first `[` and the last `]`, inclusive.
///
/// # Errors
///
/// Returns [`StoreError::MissingArray`] if either bracket is missing or the
/// last `]` precedes the first `[`.
pub fn extract_array_literal(text: &str) -> Result<&str, StoreError> {
    let start = text.find('[');
    let end = text.rfind(']');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(StoreError::MissingArray(
            text.lines().next().unwrap_or_default().to_string(),
        )),
    }
}

/// Parse the array literal embedded in a legacy module.
///
/// # Errors
///
/// Returns [`StoreError`] if no array literal is found or it is not a JSON
/// array of objects.
pub fn parse_legacy_module(text: &str) -> Result<Vec<Record>, StoreError> {
    json::parse_records(extract_array_literal(text)?)
}

/// Render `value` as an `export const` module.
///
/// # Errors
///
/// Returns [`StoreError::Json`] if `value` cannot be serialized.
pub fn render_js_module<T: Serialize + ?Sized>(
    export_name: &str,
    value: &T,
) -> Result<String, StoreError> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(format!(
        "{GENERATED_HEADER}\nexport const {export_name} = {body};\n"
    ))
}

/// Write a rendered module to `path`, creating the parent directory.
///
/// # Errors
///
/// Returns [`StoreError`] if rendering or the write fails.
pub fn write_js_module<T: Serialize + ?Sized>(
    path: &Path,
    export_name: &str,
    value: &T,
) -> Result<(), StoreError> {
    let content = render_js_module(export_name, value)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| StoreError::io(path, e))
}

/// Convert a legacy module into the JSON store format.
///
/// Unlike [`json::load`] this is strict: importing a corrupted module must
/// not produce an empty data file.
///
/// # Errors
///
/// Returns [`StoreError`] if the module cannot be read or parsed, or the JSON
/// file cannot be written.
pub fn import_legacy(js_path: &Path, json_path: &Path) -> Result<usize, StoreError> {
    let text = fs::read_to_string(js_path).map_err(|e| StoreError::io(js_path, e))?;
    let records = parse_legacy_module(&text)?;
    json::save(json_path, &records)?;
    Ok(records.len())
}
