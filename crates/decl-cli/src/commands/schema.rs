use decl_core::schema::Artifact;

use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `declmgr schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = Artifact::from_name(&args.artifact)?.schema()?;
    println!("{}", output::render(&schema)?);
    Ok(())
}
