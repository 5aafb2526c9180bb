//! Field allow-lists per collection.

use agg_core::Collection;

/// Required and optional top-level fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl Schema {
    /// Whether `field` may appear on a record.
    #[must_use]
    pub fn allows(&self, field: &str) -> bool {
        self.required.contains(&field) || self.optional.contains(&field)
    }
}

const TOOLS: Schema = Schema {
    required: &["id", "name", "description", "category", "subcategory"],
    optional: &["logo", "url", "tags", "enterprise", "pricing", "useCases"],
};

const CATEGORIES: Schema = Schema {
    required: &["id", "name", "description", "subcategories"],
    optional: &["icon"],
};

// `logo` and `url` are written by the logo pipeline.
const AGENTS: Schema = Schema {
    required: &[
        "id",
        "name",
        "description",
        "category",
        "subcategory",
        "model",
        "features",
    ],
    optional: &["implementation", "useCases", "demoPrompt", "logo", "url"],
};

#[must_use]
pub const fn schema_for(collection: Collection) -> &'static Schema {
    match collection {
        Collection::Tools => &TOOLS,
        Collection::Categories => &CATEGORIES,
        Collection::Agents => &AGENTS,
    }
}
