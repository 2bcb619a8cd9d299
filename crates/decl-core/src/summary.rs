//! Project-wide and single-file summaries of a declaration report.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{SymbolTypes, classify};
use crate::language;
use crate::report::RawDeclarationReport;

/// Files with more symbols than this are listed as high complexity.
pub const HIGH_COMPLEXITY_SYMBOLS: usize = 20;

/// Files larger than this many bytes are listed as large.
pub const LARGE_FILE_BYTES: u64 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Summary {
    pub total_files: usize,
    pub total_symbols: usize,
    pub languages: BTreeSet<String>,
    pub file_types: BTreeMap<String, usize>,
    pub complexity_analysis: ComplexityAnalysis,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplexityAnalysis {
    pub high_complexity_files: Vec<HighComplexityFile>,
    pub large_files: Vec<LargeFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HighComplexityFile {
    pub file: String,
    pub symbol_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LargeFile {
    pub file: String,
    pub size: u64,
}

/// Breakdown of a single file of the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileSummary {
    pub file_name: String,
    pub total_symbols: usize,
    pub symbol_types: SymbolTypes,
    pub file_size: u64,
    pub last_modified: String,
    pub purpose: String,
}

/// Aggregate every file of `report` in one pass, in report order.
#[must_use]
pub fn summarize(report: &RawDeclarationReport) -> Summary {
    let mut summary = Summary {
        total_files: report.file_count(),
        ..Summary::default()
    };

    for (path, record) in &report.files {
        let symbol_count = record.symbol_count();
        summary.total_symbols += symbol_count;

        let extension = language::extension_of(path);
        if let Some(label) = language::detect(&extension) {
            summary.languages.insert(label.to_string());
        }
        *summary.file_types.entry(extension).or_insert(0) += 1;

        if symbol_count > HIGH_COMPLEXITY_SYMBOLS {
            summary
                .complexity_analysis
                .high_complexity_files
                .push(HighComplexityFile {
                    file: path.clone(),
                    symbol_count,
                });
        }

        if record.file_size() > LARGE_FILE_BYTES {
            summary.complexity_analysis.large_files.push(LargeFile {
                file: path.clone(),
                size: record.file_size(),
            });
        }
    }

    tracing::debug!(
        files = summary.total_files,
        symbols = summary.total_symbols,
        "summarized declaration report"
    );
    summary
}

/// Summarize the record stored under `path`.
///
/// An absent path is not an error: counts are zero and strings empty.
#[must_use]
pub fn summarize_file(report: &RawDeclarationReport, path: &str) -> FileSummary {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(record) = report.files.get(path) else {
        return FileSummary {
            file_name,
            ..FileSummary::default()
        };
    };

    FileSummary {
        file_name,
        total_symbols: record.symbol_count(),
        symbol_types: classify(&record.symbols),
        file_size: record.file_size(),
        last_modified: record.last_modified.clone().unwrap_or_default(),
        purpose: record.purpose.clone(),
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::report::{FileRecord, SymbolDescriptor};

    fn record(symbols: usize, file_size: u64) -> FileRecord {
        FileRecord {
            symbols: (0..symbols)
                .map(|i| SymbolDescriptor::new(format!("func F{i}()")))
                .collect(),
            file_size: Some(file_size),
            ..FileRecord::default()
        }
    }

    fn report(entries: Vec<(&str, FileRecord)>) -> RawDeclarationReport {
        RawDeclarationReport::from_files(
            entries
                .into_iter()
                .map(|(path, record)| (path.to_string(), record))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn single_large_complex_go_file() {
        let summary = summarize(&report(vec![("main.go", record(25, 12_000))]));

        assert_eq!(summary.total_files, 1);
        assert_eq!(summary.total_symbols, 25);
        assert_eq!(summary.languages, BTreeSet::from(["Go".to_string()]));
        assert_eq!(
            summary.complexity_analysis.high_complexity_files,
            vec![HighComplexityFile {
                file: "main.go".into(),
                symbol_count: 25,
            }]
        );
        assert_eq!(
            summary.complexity_analysis.large_files,
            vec![LargeFile {
                file: "main.go".into(),
                size: 12_000,
            }]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let summary = summarize(&report(vec![
            ("at_limit.py", record(20, 10_000)),
            ("over_limit.py", record(21, 10_001)),
        ]));

        let analysis = summary.complexity_analysis;
        assert_eq!(analysis.high_complexity_files.len(), 1);
        assert_eq!(analysis.high_complexity_files[0].file, "over_limit.py");
        assert_eq!(analysis.large_files.len(), 1);
        assert_eq!(analysis.large_files[0].file, "over_limit.py");
    }

    #[test]
    fn analysis_lists_follow_report_order() {
        let summary = summarize(&report(vec![
            ("z.go", record(30, 0)),
            ("a.go", record(22, 0)),
        ]));
        let files: Vec<&str> = summary
            .complexity_analysis
            .high_complexity_files
            .iter()
            .map(|entry| entry.file.as_str())
            .collect();
        assert_eq!(files, ["z.go", "a.go"]);
    }

    #[test]
    fn languages_deduplicate_and_unknown_extensions_only_count_types() {
        let summary = summarize(&report(vec![
            ("a.ts", record(1, 0)),
            ("b.tsx", record(1, 0)),
            ("c.TS", record(1, 0)),
            ("README.md", record(0, 0)),
            ("Makefile", record(0, 0)),
        ]));

        assert_eq!(summary.languages, BTreeSet::from(["TypeScript".to_string()]));
        assert_eq!(summary.file_types[".ts"], 2);
        assert_eq!(summary.file_types[".tsx"], 1);
        assert_eq!(summary.file_types[".md"], 1);
        assert_eq!(summary.file_types[""], 1);
        assert_eq!(summary.total_symbols, 3);
    }

    #[test]
    fn trailing_dot_counts_as_no_extension() {
        let summary = summarize(&report(vec![("foo.", record(0, 0)), ("Makefile", record(0, 0))]));
        assert_eq!(summary.file_types.len(), 1);
        assert_eq!(summary.file_types[""], 2);
        assert!(summary.languages.is_empty());
    }

    #[test]
    fn empty_report_summarizes_to_zero() {
        assert_eq!(summarize(&RawDeclarationReport::default()), Summary::default());
    }

    #[test]
    fn file_summary_reads_record_fields() {
        let mut rec = record(3, 512);
        rec.symbols.push(SymbolDescriptor::new("const Limit = 3"));
        rec.last_modified = Some("2024-05-01T10:00:00Z".into());
        rec.purpose = "命令行入口".into();

        let summary = summarize_file(&report(vec![("cmd/app/main.go", rec)]), "cmd/app/main.go");
        assert_eq!(summary.file_name, "main.go");
        assert_eq!(summary.total_symbols, 4);
        assert_eq!(summary.symbol_types.functions, 3);
        assert_eq!(summary.symbol_types.constants, 1);
        assert_eq!(summary.file_size, 512);
        assert_eq!(summary.last_modified, "2024-05-01T10:00:00Z");
        assert_eq!(summary.purpose, "命令行入口");
    }

    #[test]
    fn file_summary_for_absent_path_is_empty() {
        let summary = summarize_file(&report(vec![("a.go", record(4, 10))]), "src/missing.rs");
        assert_eq!(
            summary,
            FileSummary {
                file_name: "missing.rs".into(),
                ..FileSummary::default()
            }
        );
    }
}
