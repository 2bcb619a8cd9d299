use decl_core::artifacts::{EnrichedReport, ProjectDeclarations};
use decl_core::persist::write_artifact;
use decl_producer::{AcquireScope, ReportSource};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateProjectArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `declmgr create-project`.
pub async fn handle<S: ReportSource>(
    args: &CreateProjectArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = ctx.acquirer.acquire(&AcquireScope::WholeProject).await?;
    let project = ProjectDeclarations::from_enriched(EnrichedReport::new(ctx.project_root(), report));

    let path = ctx.output_path(args.output.as_deref(), &ctx.config.output.project);
    write_artifact(&path, &project)?;

    output::confirm(&output::project_summary(&project), flags);
    output::confirm(&format!("Saved to {}", path.display()), flags);
    output::verbose(&project, flags)
}
