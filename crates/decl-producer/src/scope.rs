//! What to acquire, and how a requested file maps onto a report key.

use std::path::{Component, Path, PathBuf};

use crate::error::AcquireError;

/// A file resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Absolute location of the file.
    pub path: PathBuf,
    /// Project-relative, `/`-separated key as used by the producer report.
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireScope {
    WholeProject,
    SingleFile(ResolvedFile),
}

/// Resolve `file` (absolute, or relative to `project_root`) to a report key.
///
/// The path is normalized lexically so an in-project symlink keeps its
/// in-project key even when it points elsewhere. A path that only reaches the
/// root through a symlinked directory is retried with its parent canonicalized.
pub fn resolve_file(project_root: &Path, file: &Path) -> Result<ResolvedFile, AcquireError> {
    let joined = if file.is_absolute() {
        file.to_path_buf()
    } else {
        project_root.join(file)
    };
    let lexical = normalize_lexically(&joined);
    let path = if lexical.starts_with(project_root) {
        lexical
    } else {
        canonical_parent(&lexical).unwrap_or(lexical)
    };

    let relative = path
        .strip_prefix(project_root)
        .map_err(|_| AcquireError::outside(&path, project_root))?;

    let key = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if key.is_empty() {
        return Err(AcquireError::outside(&path, project_root));
    }

    Ok(ResolvedFile { path, key })
}

/// `path` with its parent directory canonicalized and the leaf left alone.
fn canonical_parent(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?.canonicalize().ok()?;
    Some(parent.join(path.file_name()?))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
