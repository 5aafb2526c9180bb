use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Refresh every collection from the configured data source.
    Fetch(FetchArgs),
    /// Add a logo reference to tools and agents that have none.
    #[command(name = "ensure-fields")]
    EnsureFields,
    /// Normalize logo references to `images/logos/<file>`.
    #[command(name = "fix-paths")]
    FixPaths,
    /// Download missing logos, update references, remove unused files.
    #[command(name = "sync-logos")]
    SyncLogos,
    /// Run `sync-logos` unless enough logos already exist. Never fails.
    ///
    /// Only image files (png, jpg, jpeg, svg) in the logo directory count
    /// towards `logos.min_existing`; other entries are ignored.
    #[command(name = "ensure-logos")]
    EnsureLogos,
    /// Remove logo files no company needs.
    #[command(name = "cleanup-logos")]
    CleanupLogos(CleanupArgs),
    /// Compare logo files on disk with what the data references.
    #[command(name = "audit-logos")]
    AuditLogos,
    /// Generate JS bindings and the featured bundle.
    Process,
    /// Validate fields, references and logo files.
    Validate,
    /// Convert legacy `export const` data modules to JSON.
    #[command(name = "import-legacy")]
    ImportLegacy(ImportArgs),
    /// Full pipeline: fetch, fields, [logos], process, validate, site build.
    Build(BuildArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Skip all outbound API calls and keep existing data.
    #[arg(long)]
    pub offline: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CleanupArgs {
    /// Report what would be removed without deleting anything.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Directory holding `tools.js`, `categories.js`, `agents.js`
    /// (defaults to the data directory).
    #[arg(long)]
    pub from: Option<String>,

    /// Overwrite JSON files that already exist.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Run `ensure-logos` before processing.
    #[arg(long)]
    pub with_logos: bool,

    /// Skip all outbound API calls during the fetch step.
    #[arg(long)]
    pub offline: bool,

    /// Stop after validation; do not run the site build command.
    #[arg(long)]
    pub skip_site: bool,
}
