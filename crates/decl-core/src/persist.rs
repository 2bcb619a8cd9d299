//! Whole-file JSON persistence for artifacts.
//!
//! Output is two-space indented UTF-8; non-ASCII text is written unescaped.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::CoreError;

/// Serialize `value` and write it to `path` in a single pass.
///
/// Missing parent directories are created.
pub fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<(), CoreError> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, rendered).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "artifact written");
    Ok(())
}

pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let raw = fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
