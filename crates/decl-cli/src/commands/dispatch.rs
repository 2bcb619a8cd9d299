use decl_producer::ReportSource;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch<S: ReportSource>(
    command: Commands,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::GetAll(args) => commands::get_all::handle(&args, ctx, flags).await,
        Commands::GetFile(args) => commands::get_file::handle(&args, ctx, flags).await,
        Commands::CreateProject(args) => commands::create_project::handle(&args, ctx, flags).await,
        Commands::UpdateFile(args) => commands::update_file::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args),
    }
}
