use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    /// No producer executable at any searched location.
    #[error("producer '{name}' not found (searched: {})", .searched.join(", "))]
    ToolNotFound { name: String, searched: Vec<String> },

    /// The producer exceeded its wall-clock budget and was killed.
    #[error("producer did not finish within {seconds}s")]
    Timeout { seconds: u64 },

    /// The producer ran but exited non-zero or wrote no report.
    #[error("producer failed: {0}")]
    AcquisitionFailed(String),

    /// A single-file request named a path outside the project root.
    #[error("'{}' is outside the project root '{}'", .path.display(), .root.display())]
    OutsideProject { path: PathBuf, root: PathBuf },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("producer report is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AcquireError {
    pub(crate) fn outside(path: &Path, root: &Path) -> Self {
        Self::OutsideProject {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        }
    }
}
