use std::collections::HashSet;

use serde_json::Value;

use crate::record::Record;

/// Lookup structure over the two-level category hierarchy.
///
/// Categories are matched by exact id; subcategories by the composite
/// `category:subcategory` key, so the same subcategory id may appear under
/// several categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: HashSet<String>,
    subcategories: HashSet<String>,
}

impl CategoryTree {
    /// Build the tree from category records.
    ///
    /// A missing or non-array `subcategories` field contributes no keys;
    /// field-level validation reports it separately.
    #[must_use]
    pub fn from_records(categories: &[Record]) -> Self {
        let mut tree = Self::default();
        for category in categories {
            let Some(category_id) = category.id() else {
                continue;
            };
            if let Some(Value::Array(subs)) = category.get("subcategories") {
                for sub in subs {
                    if let Some(sub_id) = sub.get("id").and_then(Value::as_str) {
                        tree.subcategories.insert(composite_key(&category_id, sub_id));
                    }
                }
            }
            tree.categories.insert(category_id);
        }
        tree
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    #[must_use]
    pub fn has_subcategory(&self, category: &str, subcategory: &str) -> bool {
        self.subcategories
            .contains(&composite_key(category, subcategory))
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn subcategory_count(&self) -> usize {
        self.subcategories.len()
    }
}

fn composite_key(category: &str, subcategory: &str) -> String {
    format!("{category}:{subcategory}")
}
