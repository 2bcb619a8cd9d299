//! # decl-config
//!
//! Layered configuration loading for declmgr using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DECLMGR_*` prefix, `__` as separator)
//! 2. Project-level `<project>/.declmgr/config.toml`
//! 3. User-level `~/.config/declmgr/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DECLMGR_PRODUCER__PATH` -> `producer.path`,
//! `DECLMGR_OUTPUT__ALL` -> `output.all`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use decl_config::DeclConfig;
//!
//! let config = DeclConfig::load(Path::new(".")).expect("config");
//! println!("producer timeout: {:?}", config.producer.project_timeout());
//! ```

mod error;
mod output;
mod producer;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use producer::ProducerConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Directory under the project root holding project-local settings.
pub const PROJECT_CONFIG_DIR: &str = ".declmgr";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeclConfig {
    #[serde(default)]
    pub producer: ProducerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl DeclConfig {
    /// Load configuration for the project at `project_root` from all sources.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(project_root))
    }

    /// Extract and validate a configuration from an arbitrary provider chain.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.producer.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DECLMGR_").split("__"))
    }

    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("declmgr").join("config.toml"))
    }
}
