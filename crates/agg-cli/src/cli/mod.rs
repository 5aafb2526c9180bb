use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, ModeArg, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `aggr` binary.
#[derive(Debug, Parser)]
#[command(
    name = "aggr",
    version,
    about = "AI tools aggregator - data, logo and build toolchain"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Site project root (defaults to auto-detect)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Validation mode, overriding configuration
    #[arg(short, long, global = true)]
    pub mode: Option<ModeArg>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            mode: self.mode.map(Into::into),
        }
    }
}
