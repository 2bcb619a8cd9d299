//! Fake report sources and a scratch project for handler tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use decl_config::{DeclConfig, ProducerConfig};
use decl_core::{FileRecord, RawDeclarationReport, SymbolDescriptor};
use decl_producer::{AcquireError, ReportSource};
use tempfile::TempDir;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub struct Canned(pub RawDeclarationReport);

impl ReportSource for Canned {
    async fn generate(&self, _project_root: &Path) -> Result<RawDeclarationReport, AcquireError> {
        Ok(self.0.clone())
    }
}

pub struct Stalled;

impl ReportSource for Stalled {
    async fn generate(&self, _project_root: &Path) -> Result<RawDeclarationReport, AcquireError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(RawDeclarationReport::default())
    }
}

pub struct TestProject {
    _temp: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("tempdir should create");
        let root = temp.path().canonicalize().expect("tempdir should canonicalize");
        Self { _temp: temp, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn context(&self, report: RawDeclarationReport) -> AppContext<Canned> {
        self.context_with(Canned(report))
    }

    /// One-second budgets so stalled sources fail fast.
    pub fn context_with<S: ReportSource>(&self, source: S) -> AppContext<S> {
        let config = DeclConfig {
            producer: ProducerConfig {
                project_timeout_secs: 1,
                file_timeout_secs: 1,
                ..ProducerConfig::default()
            },
            ..DeclConfig::default()
        };
        AppContext::with_source(source, self.root.clone(), config)
    }
}

pub fn quiet() -> GlobalFlags {
    GlobalFlags {
        quiet: true,
        verbose: false,
        path: PathBuf::from("."),
    }
}

fn record(prototypes: &[&str], file_size: u64, purpose: &str) -> FileRecord {
    FileRecord {
        symbols: prototypes.iter().copied().map(SymbolDescriptor::new).collect(),
        file_size: Some(file_size),
        purpose: purpose.to_string(),
        ..FileRecord::default()
    }
}

/// Three files, 27 symbols: a large complex entry point, a test, a plain note.
pub fn sample_report() -> RawDeclarationReport {
    let functions: Vec<String> = (0..25).map(|i| format!("func handler{i}()")).collect();
    let functions: Vec<&str> = functions.iter().map(String::as_str).collect();

    let mut report = RawDeclarationReport::default();
    report.project_name = Some("outline".into());
    report
        .files
        .insert("cmd/main.go".into(), record(&functions, 12_000, "main entry point"));
    report.files.insert(
        "internal/parser_test.go".into(),
        record(
            &["func TestParse(t *testing.T)", "var cases []string"],
            900,
            "parser test",
        ),
    );
    report.files.insert("docs/notes.txt".into(), record(&[], 40, ""));
    report
}
