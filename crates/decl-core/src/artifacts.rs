//! Artifacts written by the `declmgr` actions.
//!
//! Each artifact is built fresh from one producer report and written once;
//! a later run writes a new file instead of merging into an earlier one.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::changes::{ChangeEvent, record_update};
use crate::clock;
use crate::index::{FileIndex, build_index};
use crate::report::RawDeclarationReport;
use crate::summary::{FileSummary, Summary, summarize, summarize_file};

/// Name used when neither the producer nor the project path yields one.
pub const UNKNOWN_PROJECT: &str = "unknown project";

/// Whole-project report written by `get-all`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EnrichedReport {
    pub timestamp: String,
    pub project_path: String,
    pub total_files: usize,
    pub declarations: RawDeclarationReport,
    pub summary: Summary,
}

impl EnrichedReport {
    #[must_use]
    pub fn new(project_path: &Path, declarations: RawDeclarationReport) -> Self {
        let summary = summarize(&declarations);
        Self {
            timestamp: clock::now(),
            project_path: project_path.display().to_string(),
            total_files: declarations.file_count(),
            declarations,
            summary,
        }
    }
}

/// Single-file report written by `get-file`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FileReport {
    pub timestamp: String,
    pub file_path: String,
    pub file_name: String,
    pub declarations: RawDeclarationReport,
    pub summary: FileSummary,
}

impl FileReport {
    /// `file_path` is the resolved location of the file; `key` is its
    /// project-relative key inside `declarations`.
    #[must_use]
    pub fn new(file_path: &Path, key: &str, declarations: RawDeclarationReport) -> Self {
        let summary = summarize_file(&declarations, key);
        let file_name = file_path
            .file_name()
            .map_or_else(|| summary.file_name.clone(), |name| name.to_string_lossy().into_owned());
        Self {
            timestamp: clock::now(),
            file_path: file_path.display().to_string(),
            file_name,
            declarations,
            summary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub path: String,
    pub created_at: String,
    pub total_files: usize,
}

/// Project artifact written by `create-project`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectDeclarations {
    pub project_info: ProjectInfo,
    pub declarations: RawDeclarationReport,
    pub summary: Summary,
    pub file_index: FileIndex,
}

impl ProjectDeclarations {
    #[must_use]
    pub fn from_enriched(enriched: EnrichedReport) -> Self {
        let file_index = build_index(&enriched.declarations);
        let name = project_name(&enriched.declarations, &enriched.project_path);
        Self {
            project_info: ProjectInfo {
                name,
                path: enriched.project_path,
                created_at: clock::now(),
                total_files: enriched.total_files,
            },
            declarations: enriched.declarations,
            summary: enriched.summary,
            file_index,
        }
    }
}

/// Producer-reported project name, else the project directory name.
#[must_use]
pub fn project_name(report: &RawDeclarationReport, project_path: &str) -> String {
    report
        .project_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .or_else(|| {
            Path::new(project_path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    Update,
}

/// Update artifact written by `update-file`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UpdateRecord {
    pub timestamp: String,
    pub file_path: String,
    pub file_name: String,
    pub action: UpdateAction,
    pub declarations: RawDeclarationReport,
    pub summary: FileSummary,
    pub changes: Vec<ChangeEvent>,
}

impl UpdateRecord {
    #[must_use]
    pub fn from_file_report(report: FileReport) -> Self {
        let changes = record_update(&report.declarations);
        Self {
            timestamp: clock::now(),
            file_path: report.file_path,
            file_name: report.file_name,
            action: UpdateAction::Update,
            declarations: report.declarations,
            summary: report.summary,
            changes,
        }
    }
}
