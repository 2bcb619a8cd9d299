use decl_core::artifacts::EnrichedReport;
use decl_core::persist::write_artifact;
use decl_producer::{AcquireScope, ReportSource};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetAllArgs;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output;

/// Handle `declmgr get-all`.
pub async fn handle<S: ReportSource>(
    args: &GetAllArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::note_no_cache(args.no_cache);
    let report = ctx.acquirer.acquire(&AcquireScope::WholeProject).await?;
    let enriched = EnrichedReport::new(ctx.project_root(), report);

    let path = ctx.output_path(args.output.as_deref(), &ctx.config.output.all);
    write_artifact(&path, &enriched)?;

    output::confirm(
        &format!(
            "Declarations for {} files ({} symbols) saved to {}",
            enriched.total_files,
            enriched.summary.total_symbols,
            path.display()
        ),
        flags,
    );
    output::verbose(&enriched, flags)
}
