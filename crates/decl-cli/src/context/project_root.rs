use std::path::{Path, PathBuf};

use anyhow::Context;

/// Canonicalize `--path` so file keys and output paths share one root.
pub fn resolve_project_root(path: &Path) -> anyhow::Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("invalid --path '{}': directory does not exist", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("invalid --path '{}': not a directory", path.display());
    }
    Ok(root)
}
