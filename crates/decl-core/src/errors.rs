//! Cross-cutting error types for declmgr.
//!
//! Producer failures (`ToolNotFound`, `Timeout`, ...) live in `decl-producer`
//! and configuration failures in `decl-config`. They converge as
//! `anyhow::Error` in `decl-cli`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A required argument for the requested action is missing.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Reading or writing an artifact failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown artifact name requested from the schema registry.
    #[error("Unknown artifact: {0}")]
    UnknownArtifact(String),
}
