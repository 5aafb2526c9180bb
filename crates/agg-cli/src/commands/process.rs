use std::path::PathBuf;

use agg_config::BuildConfig;
use agg_core::{Collection, Record};
use agg_store::Dataset;
use agg_store::legacy::write_js_module;
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// File name of the featured bundle inside the processed directory.
pub const FEATURED_FILE: &str = "featured.js";

#[derive(Debug, Serialize)]
pub struct BindingRow {
    pub collection: Collection,
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub bindings: Vec<BindingRow>,
    pub featured_path: PathBuf,
    pub featured_tools: usize,
    pub featured_categories: usize,
    pub featured_agents: usize,
}

/// Highlighted records shown on the landing page.
#[derive(Debug, PartialEq, Serialize)]
pub struct Featured<'a> {
    pub tools: &'a [Record],
    pub categories: &'a [Record],
    pub agents: &'a [Record],
}

fn first(records: &[Record], count: usize) -> &[Record] {
    &records[..count.min(records.len())]
}

/// The first configured number of records of each collection.
#[must_use]
pub fn featured<'a>(dataset: &'a Dataset, build: &BuildConfig) -> Featured<'a> {
    Featured {
        tools: first(&dataset.tools, build.featured_tools),
        categories: first(&dataset.categories, build.featured_categories),
        agents: first(&dataset.agents, build.featured_agents),
    }
}

/// Render the JS bindings of every collection and the featured bundle.
pub fn run(ctx: &AppContext) -> anyhow::Result<ProcessResponse> {
    let dataset = ctx.store().load_all();

    let mut bindings = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        let path = ctx
            .paths
            .bindings_dir
            .join(format!("{}.js", collection.file_stem()));
        let records = dataset.get(collection);
        write_js_module(&path, collection.export_name(), records)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(%collection, path = %path.display(), "wrote binding");
        bindings.push(BindingRow {
            collection,
            path,
            records: records.len(),
        });
    }

    let bundle = featured(&dataset, &ctx.config.build);
    let featured_path = ctx.paths.processed_dir.join(FEATURED_FILE);
    write_js_module(&featured_path, "featured", &bundle)
        .with_context(|| format!("failed to write {}", featured_path.display()))?;

    Ok(ProcessResponse {
        bindings,
        featured_path,
        featured_tools: bundle.tools.len(),
        featured_categories: bundle.categories.len(),
        featured_agents: bundle.agents.len(),
    })
}

/// Handle `aggr process`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(ctx)?, flags.format)
}
