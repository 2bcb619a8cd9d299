use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::Commands;

/// Top-level CLI parser for the `declmgr` binary.
#[derive(Debug, Parser)]
#[command(
    name = "declmgr",
    version,
    about = "declmgr - enriched symbol declaration reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root path
    #[arg(short, long, global = true, default_value = ".")]
    pub path: PathBuf,

    /// Quiet mode (suppress confirmations)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging, full result JSON)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            path: self.path.clone(),
        }
    }
}
