use agg_core::Collection;
use agg_sources::{RefreshSummary, refresh_collection};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Refresh every collection in load order.
pub async fn run(ctx: &AppContext, offline: bool) -> anyhow::Result<Vec<RefreshSummary>> {
    let store = ctx.store();
    let source = ctx.source(offline);

    let mut summaries = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        let summary = refresh_collection(&store, &source, collection)
            .await
            .with_context(|| format!("failed to refresh {collection}"))?;
        summaries.push(summary);
    }
    Ok(summaries)
}

/// Handle `aggr fetch`.
pub async fn handle(args: &FetchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = run(ctx, args.offline).await?;
    output(&summaries, flags.format)
}
