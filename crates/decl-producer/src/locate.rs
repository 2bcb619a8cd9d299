//! Producer executable discovery.
//!
//! Search order: the configured path, then the directory of the running
//! binary and its `build/` child, then the project root and its `build/`
//! child, then every `PATH` entry.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use decl_config::ProducerConfig;

use crate::error::AcquireError;

pub fn locate_producer(config: &ProducerConfig, project_root: &Path) -> Result<PathBuf, AcquireError> {
    let name = config.executable_name();

    if let Some(explicit) = config.explicit_path() {
        if explicit.is_file() {
            tracing::debug!(path = %explicit.display(), "using configured producer");
            return Ok(explicit);
        }
        return Err(AcquireError::ToolNotFound {
            name,
            searched: vec![explicit.display().to_string()],
        });
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let candidates = candidate_paths(&name, exe_dir.as_deref(), project_root);

    if let Some(found) = candidates.iter().find(|candidate| candidate.is_file()) {
        tracing::debug!(path = %found.display(), "found producer next to binary or project");
        return Ok(found.clone());
    }

    if let Some(found) = search_path(&name, std::env::var_os("PATH").as_deref()) {
        tracing::debug!(path = %found.display(), "found producer on PATH");
        return Ok(found);
    }

    let mut searched = candidates
        .iter()
        .map(|candidate| candidate.display().to_string())
        .collect::<Vec<_>>();
    searched.push("PATH".to_string());
    Err(AcquireError::ToolNotFound { name, searched })
}

fn candidate_paths(name: &str, exe_dir: Option<&Path>, project_root: &Path) -> Vec<PathBuf> {
    exe_dir
        .into_iter()
        .chain(std::iter::once(project_root))
        .flat_map(|dir| [dir.join(name), dir.join("build").join(name)])
        .collect()
}

fn search_path(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    std::env::split_paths(path_var?)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
