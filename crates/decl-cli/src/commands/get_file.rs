use decl_core::persist::write_artifact;
use decl_producer::ReportSource;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetFileArgs;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output;

/// Handle `declmgr get-file`.
pub async fn handle<S: ReportSource>(
    args: &GetFileArgs,
    ctx: &AppContext<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file = args.target.required("get-file")?;
    shared::note_no_cache(args.no_cache);

    let report = shared::file_report(ctx, file).await?;
    let path = ctx.output_path(args.output.as_deref(), &ctx.config.output.file);
    write_artifact(&path, &report)?;

    output::confirm(
        &format!(
            "Declarations for {} ({} symbols) saved to {}",
            report.file_name,
            report.summary.total_symbols,
            path.display()
        ),
        flags,
    );
    output::verbose(&report, flags)
}

#[cfg(test)]
mod tests {
    use decl_core::CoreError;
    use decl_core::artifacts::FileReport;
    use decl_core::persist::read_artifact;
    use decl_producer::AcquireError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::root_commands::FileTarget;
    use crate::commands::test_support::{TestProject, quiet, sample_report};

    fn args(file: Option<&str>) -> GetFileArgs {
        GetFileArgs {
            target: FileTarget {
                file: file.map(Into::into),
            },
            output: None,
            no_cache: false,
        }
    }

    #[tokio::test]
    async fn single_file_report_keeps_one_key() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());

        handle(&args(Some("cmd/main.go")), &ctx, &quiet()).await.unwrap();

        let written: FileReport = read_artifact(&project.root().join("file_declarations.json")).unwrap();
        let keys: Vec<&str> = written.declarations.files.keys().map(String::as_str).collect();
        assert_eq!(keys, ["cmd/main.go"]);
        assert_eq!(written.file_name, "main.go");
        assert_eq!(written.summary.total_symbols, 25);
        assert_eq!(written.summary.symbol_types.functions, 25);
        assert_eq!(written.summary.file_size, 12_000);
    }

    #[tokio::test]
    async fn absent_file_yields_zero_summary() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());

        handle(&args(Some("src/absent.rs")), &ctx, &quiet()).await.unwrap();

        let written: FileReport = read_artifact(&project.root().join("file_declarations.json")).unwrap();
        assert_eq!(written.summary.total_symbols, 0);
        assert_eq!(written.summary.symbol_types.total(), 0);
        assert_eq!(written.summary.file_size, 0);
        assert_eq!(written.summary.purpose, "");
        assert_eq!(written.declarations.file_count(), 1);
    }

    #[tokio::test]
    async fn missing_file_argument_is_usage_error() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());

        let error = handle(&args(None), &ctx, &quiet()).await.unwrap_err();
        assert!(matches!(error.downcast_ref::<CoreError>(), Some(CoreError::Usage(_))));
        assert!(!project.root().join("file_declarations.json").exists());
    }

    #[tokio::test]
    async fn file_outside_project_is_rejected() {
        let project = TestProject::new();
        let ctx = project.context(sample_report());

        let error = handle(&args(Some("../other/main.go")), &ctx, &quiet()).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AcquireError>(),
            Some(AcquireError::OutsideProject { .. })
        ));
    }
}
