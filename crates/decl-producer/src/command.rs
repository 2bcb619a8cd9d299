use std::path::{Path, PathBuf};
use std::process::Stdio;

use decl_config::ProducerConfig;
use decl_core::RawDeclarationReport;
use tokio::process::Command;

use crate::error::AcquireError;
use crate::locate::locate_producer;
use crate::source::ReportSource;

/// File name of the report the producer is asked to write.
const REPORT_FILE: &str = "context.json";

/// Runs `<producer> generate --path <root> --output <tmp>` and reads the report.
#[derive(Debug, Clone)]
pub struct ProducerCommand {
    executable: PathBuf,
    exclude: Vec<String>,
}

impl ProducerCommand {
    #[must_use]
    pub const fn new(executable: PathBuf, exclude: Vec<String>) -> Self {
        Self {
            executable,
            exclude,
        }
    }

    /// Locate the producer for `project_root` according to `config`.
    pub fn discover(config: &ProducerConfig, project_root: &Path) -> Result<Self, AcquireError> {
        let executable = locate_producer(config, project_root)?;
        Ok(Self::new(executable, config.exclude.clone()))
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn command(&self, project_root: &Path, report_path: &Path) -> Command {
        let mut command = Command::new(&self.executable);
        command
            .arg("generate")
            .arg("--path")
            .arg(project_root)
            .arg("--output")
            .arg(report_path);
        if !self.exclude.is_empty() {
            command.arg("--exclude").arg(self.exclude.join(","));
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl ReportSource for ProducerCommand {
    async fn generate(&self, project_root: &Path) -> Result<RawDeclarationReport, AcquireError> {
        let workdir = tempfile::Builder::new().prefix("declmgr-").tempdir()?;
        let report_path = workdir.path().join(REPORT_FILE);

        tracing::debug!(
            producer = %self.executable.display(),
            root = %project_root.display(),
            output = %report_path.display(),
            "running producer"
        );
        let output = self
            .command(project_root, &report_path)
            .output()
            .await
            .map_err(|error| match error.kind() {
                std::io::ErrorKind::NotFound => AcquireError::ToolNotFound {
                    name: self.executable.display().to_string(),
                    searched: vec![self.executable.display().to_string()],
                },
                _ => AcquireError::Io(error),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let diagnostic = if stderr.is_empty() {
                format!("producer exited with {}", output.status)
            } else {
                stderr
            };
            return Err(AcquireError::AcquisitionFailed(diagnostic));
        }

        if !report_path.is_file() {
            return Err(AcquireError::AcquisitionFailed(format!(
                "producer did not write a report to {}",
                report_path.display()
            )));
        }

        let raw = tokio::fs::read_to_string(&report_path).await;
        remove_report(&report_path).await;
        let report: RawDeclarationReport = serde_json::from_str(&raw?)?;

        tracing::debug!(files = report.file_count(), "producer report parsed");
        Ok(report)
    }
}

/// Best-effort removal; the report is already in memory.
async fn remove_report(path: &Path) {
    if let Err(error) = tokio::fs::remove_file(path).await {
        tracing::warn!(%error, path = %path.display(), "failed to remove producer report");
    }
}
