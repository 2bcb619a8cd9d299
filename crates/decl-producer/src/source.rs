//! The report capability and the timeout-bounded acquirer built on it.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use decl_config::ProducerConfig;
use decl_core::RawDeclarationReport;

use crate::error::AcquireError;
use crate::scope::{AcquireScope, ResolvedFile, resolve_file};

/// Anything that can produce a whole-project declaration report.
///
/// [`crate::ProducerCommand`] runs the `contextgen` executable; other
/// implementations may call a library or a remote service.
pub trait ReportSource {
    fn generate(
        &self,
        project_root: &Path,
    ) -> impl Future<Output = Result<RawDeclarationReport, AcquireError>>;
}

/// Acquires reports for one project, bounding every producer run in time.
#[derive(Debug)]
pub struct ReportAcquirer<S> {
    source: S,
    project_root: PathBuf,
    project_timeout: Duration,
    file_timeout: Duration,
}

impl<S: ReportSource> ReportAcquirer<S> {
    #[must_use]
    pub fn new(source: S, project_root: PathBuf, config: &ProducerConfig) -> Self {
        Self::with_timeouts(
            source,
            project_root,
            config.project_timeout(),
            config.file_timeout(),
        )
    }

    #[must_use]
    pub const fn with_timeouts(
        source: S,
        project_root: PathBuf,
        project_timeout: Duration,
        file_timeout: Duration,
    ) -> Self {
        Self {
            source,
            project_root,
            project_timeout,
            file_timeout,
        }
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn resolve_file(&self, file: &Path) -> Result<ResolvedFile, AcquireError> {
        resolve_file(&self.project_root, file)
    }

    /// Run the source once and shape its report for `scope`.
    ///
    /// The producer has no single-file mode, so a single-file scope runs it
    /// over the whole project and keeps only the requested key.
    pub async fn acquire(&self, scope: &AcquireScope) -> Result<RawDeclarationReport, AcquireError> {
        let budget = match scope {
            AcquireScope::WholeProject => self.project_timeout,
            AcquireScope::SingleFile(_) => self.file_timeout,
        };
        tracing::debug!(
            root = %self.project_root.display(),
            ?scope,
            budget_secs = budget.as_secs_f64(),
            "acquiring declaration report"
        );

        let report = tokio::time::timeout(budget, self.source.generate(&self.project_root))
            .await
            .map_err(|_| AcquireError::Timeout {
                seconds: budget.as_secs(),
            })??;

        Ok(match scope {
            AcquireScope::WholeProject => report,
            AcquireScope::SingleFile(file) => report.retain_only(&file.key),
        })
    }
}
