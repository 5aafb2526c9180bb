//! Cross-collection references and id uniqueness.

use std::collections::HashSet;

use agg_core::{CategoryTree, Collection, Record};

use crate::fields::record_id;
use crate::violation::{Violation, ViolationKind};

fn check_references(
    collection: Collection,
    records: &[Record],
    tree: &CategoryTree,
    violations: &mut Vec<Violation>,
) {
    let label = collection.label();
    for record in records {
        let id = record_id(record);
        let category = record.category().unwrap_or_default();
        if !tree.has_category(category) {
            violations.push(Violation::error(
                collection,
                &id,
                ViolationKind::UnknownCategory,
                format!("{label} {id} references non-existent category: {category}"),
            ));
            continue;
        }

        let subcategory = record.subcategory().unwrap_or_default();
        if !tree.has_subcategory(category, subcategory) {
            violations.push(Violation::error(
                collection,
                &id,
                ViolationKind::UnknownSubcategory,
                format!(
                    "{label} {id} references non-existent subcategory: {subcategory} in category {category}"
                ),
            ));
        }
    }
}

/// Every tool and agent must name an existing category, and an existing
/// subcategory of it.
///
/// The subcategory is only checked once the category resolves, so an
/// unknown category yields exactly one violation.
#[must_use]
pub fn validate_integrity(tools: &[Record], agents: &[Record], tree: &CategoryTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_references(Collection::Tools, tools, tree, &mut violations);
    check_references(Collection::Agents, agents, tree, &mut violations);
    violations
}

/// Repeated ids within one collection, as warnings.
#[must_use]
pub fn find_duplicate_ids(collection: Collection, records: &[Record]) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut violations = Vec::new();
    for id in records.iter().filter_map(Record::id) {
        if !seen.insert(id.clone()) && reported.insert(id.clone()) {
            violations.push(Violation::warning(
                collection,
                &id,
                ViolationKind::DuplicateId,
                format!("Duplicate {} id: {id}", collection.label().to_lowercase()),
            ));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::violation::Severity;

    fn rec(value: serde_json::Value) -> Record {
        Record::from_value(value).unwrap()
    }

    fn tree() -> CategoryTree {
        CategoryTree::from_records(&[rec(json!({
            "id": "c1",
            "subcategories": [{"id": "s1"}],
        }))])
    }

    #[test]
    fn unknown_category_is_one_violation() {
        let tools = [rec(json!({"id": "t1", "category": "cX", "subcategory": "s1"}))];

        let violations = validate_integrity(&tools, &[], &tree());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::UnknownCategory);
        assert!(violations[0].message.contains("cX"));
    }

    #[test]
    fn unknown_subcategory_is_reported() {
        let agents = [rec(json!({"id": "a1", "category": "c1", "subcategory": "s9"}))];

        let violations = validate_integrity(&[], &agents, &tree());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::UnknownSubcategory);
        assert_eq!(
            violations[0].message,
            "Agent a1 references non-existent subcategory: s9 in category c1"
        );
    }

    #[test]
    fn resolved_references_pass() {
        let tools = [rec(json!({"id": "t1", "category": "c1", "subcategory": "s1"}))];
        assert!(validate_integrity(&tools, &[], &tree()).is_empty());
    }

    #[test]
    fn duplicates_are_warned_once() {
        let records = [
            rec(json!({"id": "x"})),
            rec(json!({"id": "x"})),
            rec(json!({"id": "x"})),
            rec(json!({"id": "y"})),
        ];

        let violations = find_duplicate_ids(Collection::Tools, &records);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].message, "Duplicate tool id: x");
    }
}
