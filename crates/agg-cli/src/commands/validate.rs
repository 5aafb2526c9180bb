use agg_validate::{ValidationReport, Violation, validate_store};
use anyhow::{Context, bail};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Validate the data files on disk in the configured mode.
pub fn run(ctx: &AppContext) -> anyhow::Result<ValidationReport> {
    validate_store(&ctx.store(), &ctx.paths.logo_dir, ctx.mode)
        .context("failed to load data for validation")
}

/// Handle `aggr validate`. Exits non-zero when any error is found.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(ctx)?;

    if flags.format == OutputFormat::Table {
        let violations: Vec<&Violation> = report.errors.iter().chain(&report.warnings).collect();
        output(&violations, flags.format)?;
    } else {
        output(&report, flags.format)?;
    }

    if !report.is_valid() {
        bail!(
            "validation failed: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }
    tracing::info!(
        records = report.records_checked,
        warnings = report.warnings.len(),
        "validation passed"
    );
    Ok(())
}
