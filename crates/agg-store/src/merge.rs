use std::collections::HashMap;

use agg_core::Record;

/// Merge `incoming` into `existing` by record id.
///
/// - a matching id gets a shallow field overwrite (incoming fields win);
/// - unmatched incoming records are appended in incoming order;
/// - existing order is preserved.
///
/// Incoming records without an id cannot match anything and are appended.
/// If `incoming` repeats an id, each occurrence overwrites in turn; if
/// `existing` repeats one, only the first occurrence is updated.
#[must_use]
pub fn merge(existing: Vec<Record>, incoming: Vec<Record>) -> Vec<Record> {
    let mut merged = existing;
    let mut index: HashMap<String, usize> = HashMap::new();
    for (position, record) in merged.iter().enumerate() {
        if let Some(id) = record.id() {
            index.entry(id).or_insert(position);
        }
    }

    for record in incoming {
        let position = record.id().and_then(|id| index.get(&id).copied());
        if let Some(position) = position {
            merged[position].overwrite_from(record);
        } else {
            if let Some(id) = record.id() {
                index.insert(id, merged.len());
            }
            merged.push(record);
        }
    }

    merged
}
