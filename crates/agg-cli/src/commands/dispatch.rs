use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Fetch(args) => commands::fetch::handle(&args, ctx, flags).await,
        Commands::EnsureFields => commands::fields::handle_ensure(ctx, flags),
        Commands::FixPaths => commands::fields::handle_fix(ctx, flags),
        Commands::SyncLogos => commands::logos::handle_sync(ctx, flags).await,
        Commands::EnsureLogos => commands::logos::handle_ensure(ctx, flags).await,
        Commands::CleanupLogos(args) => commands::logos::handle_cleanup(&args, ctx, flags),
        Commands::AuditLogos => commands::logos::handle_audit(ctx, flags),
        Commands::Process => commands::process::handle(ctx, flags),
        Commands::Validate => commands::validate::handle(ctx, flags),
        Commands::ImportLegacy(args) => commands::import::handle(&args, ctx, flags),
        Commands::Build(args) => commands::build::handle(&args, ctx, flags).await,
    }
}
