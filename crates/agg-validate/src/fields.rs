//! Per-record field checks.

use agg_core::{Collection, Record};
use serde_json::Value;

use crate::schema::schema_for;
use crate::violation::{Violation, ViolationKind};

/// Whether a field value counts as present.
///
/// `null`, `false`, `0` and `""` do not; arrays and objects always do,
/// even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn record_id(record: &Record) -> String {
    record.id().unwrap_or_else(|| "unknown".to_string())
}

/// Check one record against its collection's allow-list.
///
/// Every missing required field and every unknown field is reported; the
/// checks never stop at the first finding.
#[must_use]
pub fn validate_record(record: &Record, collection: Collection) -> Vec<Violation> {
    let schema = schema_for(collection);
    let id = record_id(record);
    let mut violations = Vec::new();

    for field in schema.required {
        if !record.get(field).is_some_and(is_truthy) {
            violations.push(Violation::error(
                collection,
                &id,
                ViolationKind::MissingField,
                format!("Missing required field: {field}"),
            ));
        }
    }

    for field in record.field_names() {
        if !schema.allows(field) {
            violations.push(Violation::error(
                collection,
                &id,
                ViolationKind::UnknownField,
                format!("Unknown field: {field}"),
            ));
        }
    }

    violations
}
