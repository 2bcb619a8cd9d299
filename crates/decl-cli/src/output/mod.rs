use serde::Serialize;

use crate::cli::GlobalFlags;

mod summary;

pub use summary::{project_summary, update_summary};

/// Render an artifact the way it is written to disk.
pub fn render<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print the full artifact when `--verbose` is set.
pub fn verbose<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.verbose {
        println!("{}", render(value)?);
    }
    Ok(())
}

/// Print a human-readable line unless `--quiet` is set.
pub fn confirm(message: &str, flags: &GlobalFlags) {
    if !flags.quiet {
        println!("{message}");
    }
}
