//! `aggr build`: the full site pipeline.
//!
//! fetch → ensure-fields → [ensure-logos] → process → validate → site
//! command → logo mirror. The first failing step stops the run; the report
//! up to that point is printed before the error is returned.

use std::fs;
use std::future::Future;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::commands::{fetch, fields, logos, process, validate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Ok,
    Skipped,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: &'static str,
    pub status: StepStatus,
    pub detail: String,
    pub duration_ms: u64,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct MirrorReport {
    pub source_files: usize,
    pub dist_files_before: usize,
    pub copied: usize,
    pub failed: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub success: bool,
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<MirrorReport>,
}

impl BuildReport {
    fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            success: false,
            steps: Vec::new(),
            mirror: None,
        }
    }

    fn skip(&mut self, step: &'static str, reason: &str) {
        tracing::info!(step, reason, "skipping build step");
        self.steps.push(StepReport {
            step,
            status: StepStatus::Skipped,
            detail: reason.to_string(),
            duration_ms: 0,
        });
    }

    /// Run one step, recording its outcome and duration.
    async fn step<T, Fut>(
        &mut self,
        step: &'static str,
        work: Fut,
        describe: impl FnOnce(&T) -> String,
    ) -> anyhow::Result<T>
    where
        Fut: Future<Output = anyhow::Result<T>>,
    {
        tracing::info!(step, "build step started");
        let started = Instant::now();
        let result = work.await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (status, detail) = match &result {
            Ok(value) => (StepStatus::Ok, describe(value)),
            Err(error) => (StepStatus::Failed, format!("{error:#}")),
        };
        tracing::info!(step, ?status, duration_ms, "build step finished");
        self.steps.push(StepReport {
            step,
            status,
            detail,
            duration_ms,
        });
        result.with_context(|| format!("build step `{step}` failed"))
    }
}

/// Run the pipeline, appending to `report` as steps complete.
pub async fn run(args: &BuildArgs, ctx: &AppContext, report: &mut BuildReport) -> anyhow::Result<()> {
    report
        .step("fetch", fetch::run(ctx, args.offline), |summaries| {
            let total: usize = summaries.iter().map(|s| s.total).sum();
            format!("{total} records")
        })
        .await?;

    report
        .step("ensure-fields", async { fields::ensure_fields(ctx) }, |updates| {
            let updated: usize = updates.iter().map(|u| u.updated).sum();
            format!("{updated} logo fields added")
        })
        .await?;

    if args.with_logos {
        report
            .step("ensure-logos", async { Ok(logos::ensure(ctx).await) }, |response| {
                match (&response.error, &response.summary) {
                    (Some(error), _) => format!("sync failed: {error}"),
                    (None, Some(summary)) => format!("{} downloaded", summary.downloaded),
                    (None, None) => format!("{} files present", response.existing_files),
                }
            })
            .await?;
    } else {
        report.skip("ensure-logos", "--with-logos not set");
    }

    report
        .step("process", async { process::run(ctx) }, |response| {
            format!("{} bindings written", response.bindings.len())
        })
        .await?;

    report
        .step(
            "validate",
            async {
                let validation = validate::run(ctx)?;
                if !validation.is_valid() {
                    bail!(
                        "{} error(s), first: {}",
                        validation.errors.len(),
                        validation.errors[0].message
                    );
                }
                Ok::<_, anyhow::Error>(validation)
            },
            |validation| format!("{} warning(s)", validation.warnings.len()),
        )
        .await?;

    if args.skip_site {
        report.skip("site", "--skip-site set");
        report.skip("mirror-logos", "--skip-site set");
        return Ok(());
    }

    report
        .step("site", run_site_command(ctx), |_| ctx.config.build.command.clone())
        .await?;

    let mirror = report
        .step(
            "mirror-logos",
            async { mirror_logos(&ctx.paths.logo_dir, &ctx.paths.dist_logo_dir) },
            |mirror| {
                mirror.as_ref().map_or_else(
                    || "no logo directory".to_string(),
                    |m| format!("{} copied", m.copied),
                )
            },
        )
        .await?;
    report.mirror = mirror;
    Ok(())
}

/// Run `build.command` in the project root with the site variables set.
///
/// The child's stdout goes to stderr so that stdout carries only the report.
async fn run_site_command(ctx: &AppContext) -> anyhow::Result<()> {
    let command = &ctx.config.build.command;
    let mut parts = command.split_whitespace();
    let program = parts.next().context("build.command is empty")?;

    let status = tokio::process::Command::new(program)
        .args(parts)
        .current_dir(&ctx.paths.project_root)
        .env("BASE_URL", &ctx.config.site.base_url)
        .env("SITE", &ctx.config.site.site_url)
        .stdout(std::io::stderr())
        .status()
        .await
        .with_context(|| format!("failed to start `{command}`"))?;

    if !status.success() {
        bail!("`{command}` exited with {status}");
    }
    Ok(())
}

fn list_files(dir: &Path) -> anyhow::Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).with_context(|| format!("failed to list {}", dir.display())),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Copy every file of `source` into `dist` when `dist` holds fewer files.
///
/// Returns `None` when `source` does not exist. Individual copy failures
/// are logged and listed in the report.
pub fn mirror_logos(source: &Path, dist: &Path) -> anyhow::Result<Option<MirrorReport>> {
    if !source.is_dir() {
        tracing::warn!(path = %source.display(), "logo directory missing, nothing to mirror");
        return Ok(None);
    }

    let source_files = list_files(source)?;
    let mut report = MirrorReport {
        source_files: source_files.len(),
        dist_files_before: list_files(dist)?.len(),
        ..MirrorReport::default()
    };
    if report.dist_files_before >= report.source_files {
        return Ok(Some(report));
    }

    fs::create_dir_all(dist).with_context(|| format!("failed to create {}", dist.display()))?;
    for name in source_files {
        match fs::copy(source.join(&name), dist.join(&name)) {
            Ok(_) => report.copied += 1,
            Err(error) => {
                tracing::warn!(logo = %name, %error, "failed to mirror logo");
                report.failed.push(name);
            }
        }
    }
    tracing::info!(copied = report.copied, "mirrored logos into dist");
    Ok(Some(report))
}

/// Handle `aggr build`.
pub async fn handle(args: &BuildArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut report = BuildReport::new();
    let result = run(args, ctx, &mut report).await;
    report.finished_at = Some(Utc::now());
    report.success = result.is_ok();

    output(&report, flags.format)?;
    result
}
