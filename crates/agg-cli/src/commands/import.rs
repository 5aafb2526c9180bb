use agg_core::Collection;
use agg_store::legacy::import_legacy;
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    Imported,
    /// The JSON file already exists and `--force` was not given.
    Exists,
    /// No legacy module to import.
    Missing,
}

#[derive(Debug, Serialize)]
pub struct ImportRow {
    pub collection: Collection,
    pub status: ImportStatus,
    pub records: usize,
    pub source: String,
}

/// Convert `<from>/<stem>.js` into the JSON store for every collection.
pub fn run(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<Vec<ImportRow>> {
    let store = ctx.store();
    let from = args
        .from
        .as_ref()
        .map_or_else(|| ctx.paths.data_dir.clone(), |dir| ctx.paths.project_root.join(dir));

    let mut rows = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        let js_path = from.join(format!("{}.js", collection.file_stem()));
        let json_path = store.path(collection);
        let mut row = ImportRow {
            collection,
            status: ImportStatus::Missing,
            records: 0,
            source: js_path.display().to_string(),
        };

        if !js_path.is_file() {
            tracing::warn!(path = %js_path.display(), "no legacy module");
        } else if json_path.exists() && !args.force {
            tracing::info!(path = %json_path.display(), "json file exists, skipping");
            row.status = ImportStatus::Exists;
        } else {
            row.records = import_legacy(&js_path, &json_path)
                .with_context(|| format!("failed to import {}", js_path.display()))?;
            row.status = ImportStatus::Imported;
            tracing::info!(%collection, records = row.records, "imported legacy module");
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Handle `aggr import-legacy`.
pub fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(ctx, args)?, flags.format)
}
