use std::path::Path;

use decl_core::artifacts::FileReport;
use decl_producer::{AcquireScope, ReportSource};

use crate::context::AppContext;

pub fn note_no_cache(no_cache: bool) {
    if no_cache {
        tracing::debug!("--no-cache has no effect; every run invokes the producer");
    }
}

/// Acquire the report for one file and wrap it with its file summary.
pub async fn file_report<S: ReportSource>(ctx: &AppContext<S>, file: &Path) -> anyhow::Result<FileReport> {
    let resolved = ctx.acquirer.resolve_file(file)?;
    let report = ctx
        .acquirer
        .acquire(&AcquireScope::SingleFile(resolved.clone()))
        .await?;
    Ok(FileReport::new(&resolved.path, &resolved.key, report))
}
