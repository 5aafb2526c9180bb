use agg_core::Collection;
use agg_logos::{AuditReport, CleanupReport, ProcessSummary, audit, cleanup_unused, current_logos};
use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CleanupArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
pub struct EnsureLogosResponse {
    pub existing_files: usize,
    pub min_existing: usize,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProcessSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Resolve a logo for every tool and agent, save the updated references,
/// and prune files no company needs.
pub async fn sync(ctx: &AppContext) -> anyhow::Result<ProcessSummary> {
    let store = ctx.store();
    let mut tools = store.load(Collection::Tools);
    let mut agents = store.load(Collection::Agents);
    let manager = ctx.logo_manager()?;

    let progress = Progress::bar((tools.len() + agents.len()) as u64, "logos");
    let summary = manager
        .process(&mut tools, &mut agents, |company| {
            progress.set_message(&company.label());
            progress.inc(1);
        })
        .await
        .context("logo processing failed")?;
    progress.finish_clear();

    store
        .save(Collection::Tools, &tools)
        .context("failed to save tools")?;
    store
        .save(Collection::Agents, &agents)
        .context("failed to save agents")?;

    tracing::info!(
        downloaded = summary.downloaded,
        placeholders = summary.placeholders,
        removed = summary.cleanup.removed.len(),
        "logo sync complete"
    );
    Ok(summary)
}

/// Sync logos unless the directory already holds more than
/// `logos.min_existing` images. Failures are reported, never returned.
pub async fn ensure(ctx: &AppContext) -> EnsureLogosResponse {
    let min_existing = ctx.config.logos.min_existing;
    let existing_files = match current_logos(&ctx.paths.logo_dir) {
        Ok(logos) => logos.len(),
        Err(error) => {
            tracing::warn!(%error, "could not list logo directory");
            0
        }
    };

    let mut response = EnsureLogosResponse {
        existing_files,
        min_existing,
        skipped: existing_files > min_existing,
        summary: None,
        error: None,
    };
    if response.skipped {
        tracing::info!(existing_files, "enough logos present, skipping sync");
        return response;
    }

    match sync(ctx).await {
        Ok(summary) => response.summary = Some(summary),
        Err(error) => {
            tracing::warn!(error = %format!("{error:#}"), "logo sync failed, continuing");
            response.error = Some(format!("{error:#}"));
        }
    }
    response
}

pub fn cleanup(ctx: &AppContext, dry_run: bool) -> anyhow::Result<CleanupReport> {
    let dataset = ctx.store().load_all();
    let logos = &ctx.config.logos;
    cleanup_unused(
        &ctx.paths.logo_dir,
        dataset.companies(),
        &logos.placeholder,
        &logos.keep,
        dry_run,
    )
    .context("failed to clean up logo directory")
}

pub fn audit_logos(ctx: &AppContext) -> anyhow::Result<AuditReport> {
    let dataset = ctx.store().load_all();
    audit(
        &ctx.paths.logo_dir,
        dataset.companies(),
        &ctx.config.logos.placeholder,
    )
    .context("failed to audit logo directory")
}

/// Handle `aggr sync-logos`.
pub async fn handle_sync(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&sync(ctx).await?, flags.format)
}

/// Handle `aggr ensure-logos`.
pub async fn handle_ensure(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ensure(ctx).await, flags.format)
}

/// Handle `aggr cleanup-logos`.
pub fn handle_cleanup(args: &CleanupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&cleanup(ctx, args.dry_run)?, flags.format)
}

/// Handle `aggr audit-logos`.
pub fn handle_audit(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = audit_logos(ctx)?;
    if !report.is_clean() {
        tracing::warn!(
            missing = report.missing.len(),
            without_field = report.without_field.len(),
            "logo audit found gaps"
        );
    }
    output(&report, flags.format)
}
