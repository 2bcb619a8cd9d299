use decl_core::artifacts::UpdateRecord;
use decl_core::persist::write_artifact;
use decl_producer::ReportSource;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateFileArgs;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output;

/// Handle `declmgr update-file`.
pub async fn handle<S: ReportSource>(
    args: &UpdateFileArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file = args.target.required("update-file")?;
    let record = UpdateRecord::from_file_report(shared::file_report(ctx, file).await?);

    let path = ctx.output_path(args.output.as_deref(), &ctx.config.output.update);
    write_artifact(&path, &record)?;

    output::confirm(&output::update_summary(&record), flags);
    output::confirm(&format!("Saved to {}", path.display()), flags);
    output::verbose(&record, flags)
}

#[cfg(test)]
mod tests {
    use decl_core::CoreError;
    use decl_core::artifacts::UpdateAction;
    use decl_core::changes::{ChangeKind, DECLARATION_UPDATE_DESCRIPTION};
    use decl_core::persist::read_artifact;
    use decl_producer::AcquireError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::root_commands::FileTarget;
    use crate::commands::test_support::{Stalled, TestProject, quiet, sample_report};

    fn args(file: Option<&str>) -> UpdateFileArgs {
        UpdateFileArgs {
            target: FileTarget {
                file: file.map(Into::into),
            },
            output: None,
        }
    }

    #[tokio::test]
    async fn update_record_has_one_change_event() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());

        handle(&args(Some("internal/parser_test.go")), &ctx, &quiet())
            .await
            .unwrap();

        let written: UpdateRecord =
            read_artifact(&project.root().join("updated_declarations.json")).unwrap();
        assert_eq!(written.action, UpdateAction::Update);
        assert_eq!(written.file_name, "parser_test.go");
        assert_eq!(written.summary.symbol_types.functions, 1);
        assert_eq!(written.summary.symbol_types.variables, 1);
        assert_eq!(written.changes.len(), 1);
        assert_eq!(written.changes[0].kind, ChangeKind::DeclarationUpdate);
        assert_eq!(written.changes[0].description, DECLARATION_UPDATE_DESCRIPTION);
    }

    #[tokio::test]
    async fn absolute_file_inside_root_is_accepted() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());
        let absolute = project.root().join("cmd/main.go");

        handle(&args(absolute.to_str()), &ctx, &quiet()).await.unwrap();

        let written: UpdateRecord =
            read_artifact(&project.root().join("updated_declarations.json")).unwrap();
        assert_eq!(written.summary.total_symbols, 25);
    }

    #[tokio::test]
    async fn missing_file_argument_is_usage_error() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());

        let error = handle(&args(None), &ctx, &quiet()).await.unwrap_err();
        assert!(matches!(error.downcast_ref::<CoreError>(), Some(CoreError::Usage(_))));
    }

    #[tokio::test]
    async fn timeout_writes_nothing() {
        let project = TestProject::new();
        let ctx = project.context_with(Stalled);

        let error = handle(&args(Some("cmd/main.go")), &ctx, &quiet()).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AcquireError>(),
            Some(AcquireError::Timeout { .. })
        ));
        assert!(!project.root().join("updated_declarations.json").exists());
    }
}
