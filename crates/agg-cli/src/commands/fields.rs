use agg_core::Collection;
use agg_logos::{ensure_logo_fields, fix_logo_paths};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct FieldUpdate {
    pub collection: Collection,
    pub records: usize,
    pub updated: usize,
}

#[derive(Debug, Serialize)]
pub struct PathFixRow {
    pub collection: Collection,
    pub company: String,
    pub before: String,
    pub after: String,
}

/// Add missing logo references to tools and agents; changed files are saved.
pub fn ensure_fields(ctx: &AppContext) -> anyhow::Result<Vec<FieldUpdate>> {
    let store = ctx.store();
    let mut updates = Vec::new();
    for collection in Collection::COMPANIES {
        let mut records = store.load(collection);
        let updated = ensure_logo_fields(&mut records);
        if updated > 0 {
            store
                .save(collection, &records)
                .with_context(|| format!("failed to save {collection}"))?;
            tracing::info!(%collection, updated, "added logo fields");
        }
        updates.push(FieldUpdate {
            collection,
            records: records.len(),
            updated,
        });
    }
    Ok(updates)
}

/// Normalize logo references of tools and agents; changed files are saved.
pub fn fix_paths(ctx: &AppContext) -> anyhow::Result<Vec<PathFixRow>> {
    let store = ctx.store();
    let mut rows = Vec::new();
    for collection in Collection::COMPANIES {
        let mut records = store.load(collection);
        let fixes = fix_logo_paths(&mut records, &ctx.config.logos.placeholder);
        if fixes.is_empty() {
            continue;
        }
        store
            .save(collection, &records)
            .with_context(|| format!("failed to save {collection}"))?;
        tracing::info!(%collection, fixed = fixes.len(), "normalized logo paths");
        rows.extend(fixes.into_iter().map(|fix| PathFixRow {
            collection,
            company: fix.company,
            before: fix.before,
            after: fix.after,
        }));
    }
    Ok(rows)
}

/// Handle `aggr ensure-fields`.
pub fn handle_ensure(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ensure_fields(ctx)?, flags.format)
}

/// Handle `aggr fix-paths`.
pub fn handle_fix(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&fix_paths(ctx)?, flags.format)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use agg_config::AggConfig;
    use agg_core::Record;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn context(root: &Path) -> AppContext {
        AppContext::new(root.to_path_buf(), AggConfig::default(), None)
    }

    #[test]
    fn ensure_then_fix_round() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = context(temp.path());
        let store = ctx.store();
        store
            .save(
                Collection::Tools,
                &[
                    Record::new().with("id", "aws-ai").with("name", "AWS AI"),
                    Record::new()
                        .with("id", "openai")
                        .with("logo", "/images/logos/openai.png"),
                ],
            )
            .expect("save should work");

        let updates = ensure_fields(&ctx).expect("ensure should work");
        assert_eq!(updates[0].updated, 1);
        assert_eq!(updates[1].records, 0);

        let fixes = fix_paths(&ctx).expect("fix should work");
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].after, "images/logos/openai.png");

        let tools = store.load(Collection::Tools);
        assert_eq!(tools[0].logo(), Some("images/logos/aws-ai.png"));
        assert_eq!(tools[1].logo(), Some("images/logos/openai.png"));
    }
}
