//! Settings for locating and running the declaration producer.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_name() -> String {
    "contextgen".to_string()
}

/// Budget for a whole-project producer run, in seconds.
const fn default_project_timeout_secs() -> u64 {
    120
}

/// Budget for a producer run serving a single-file request, in seconds.
const fn default_file_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProducerConfig {
    /// Explicit producer executable. Empty means search the usual locations.
    #[serde(default)]
    pub path: String,

    /// Executable name to search for (`.exe` is appended on Windows).
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_project_timeout_secs")]
    pub project_timeout_secs: u64,

    #[serde(default = "default_file_timeout_secs")]
    pub file_timeout_secs: u64,

    /// Directory or file patterns forwarded as `--exclude`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            name: default_name(),
            project_timeout_secs: default_project_timeout_secs(),
            file_timeout_secs: default_file_timeout_secs(),
            exclude: Vec::new(),
        }
    }
}

impl ProducerConfig {
    #[must_use]
    pub fn explicit_path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    #[must_use]
    pub const fn project_timeout(&self) -> Duration {
        Duration::from_secs(self.project_timeout_secs)
    }

    #[must_use]
    pub const fn file_timeout(&self) -> Duration {
        Duration::from_secs(self.file_timeout_secs)
    }

    /// File name of the executable on this platform.
    #[must_use]
    pub fn executable_name(&self) -> String {
        if cfg!(windows) && !self.name.to_ascii_lowercase().ends_with(".exe") {
            format!("{}.exe", self.name)
        } else {
            self.name.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "producer.name".into(),
                reason: "must not be empty".into(),
            });
        }
        for (field, secs) in [
            ("producer.project_timeout_secs", self.project_timeout_secs),
            ("producer.file_timeout_secs", self.file_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "timeout must be at least one second".into(),
                });
            }
        }
        Ok(())
    }
}
