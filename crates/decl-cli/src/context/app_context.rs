use std::path::{Path, PathBuf};

use anyhow::Context;
use decl_config::DeclConfig;
use decl_producer::{ProducerCommand, ReportAcquirer, ReportSource};

/// Per-invocation resources: the project, its configuration and the acquirer.
pub struct AppContext<S = ProducerCommand> {
    pub config: DeclConfig,
    pub acquirer: ReportAcquirer<S>,
}

impl AppContext {
    /// Locate the producer configured for `project_root`.
    pub fn init(project_root: PathBuf, config: DeclConfig) -> anyhow::Result<Self> {
        let producer = ProducerCommand::discover(&config.producer, &project_root)
            .context("failed to locate the declaration producer")?;
        tracing::debug!(producer = %producer.executable().display(), "producer located");
        Ok(Self::with_source(producer, project_root, config))
    }
}

impl<S: ReportSource> AppContext<S> {
    pub fn with_source(source: S, project_root: PathBuf, config: DeclConfig) -> Self {
        let acquirer = ReportAcquirer::new(source, project_root, &config.producer);
        Self { config, acquirer }
    }

    pub fn project_root(&self) -> &Path {
        self.acquirer.project_root()
    }

    /// `--output` if given, else the configured default; relative paths
    /// resolve against the project root.
    pub fn output_path(&self, explicit: Option<&Path>, default: &str) -> PathBuf {
        let chosen = explicit.unwrap_or_else(|| Path::new(default));
        if chosen.is_absolute() {
            chosen.to_path_buf()
        } else {
            self.project_root().join(chosen)
        }
    }
}
