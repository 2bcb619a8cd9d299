//! Raw declaration report emitted by `contextgen generate`.
//!
//! Only the fields the enrichment engine reads are typed. Everything else the
//! producer writes (`projectGoal`, `techStack`, `architecture`, symbol
//! `range`/`body`/`methods`, ...) is carried in `extra` and re-emitted as is.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Producer output: relative file path -> per-file record.
///
/// Keys keep the producer's order; summaries and indexes list files in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawDeclarationReport {
    #[serde(default)]
    pub files: IndexMap<String, FileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawDeclarationReport {
    /// Report holding only `files`, as built for single-file workflows.
    #[must_use]
    pub fn from_files(files: IndexMap<String, FileRecord>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    /// Narrow the report to exactly one key.
    ///
    /// A path the producer did not report maps to an empty [`FileRecord`].
    #[must_use]
    pub fn retain_only(mut self, path: &str) -> Self {
        let record = self.files.shift_remove(path).unwrap_or_default();
        let mut files = IndexMap::with_capacity(1);
        files.insert(path.to_string(), record);
        Self::from_files(files)
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.files.values().map(FileRecord::symbol_count).sum()
    }
}

/// Declarations of one source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    #[serde(default)]
    pub symbols: Vec<SymbolDescriptor>,
    /// Kept as reported, so an explicit `0` survives a rewrite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub purpose: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileRecord {
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Reported size in bytes, `0` when absent.
    #[must_use]
    pub fn file_size(&self) -> u64 {
        self.file_size.unwrap_or_default()
    }
}

/// A single extracted declaration. `prototype` is the full declaration line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SymbolDescriptor {
    #[serde(default)]
    pub prototype: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SymbolDescriptor {
    pub fn new(prototype: impl Into<String>) -> Self {
        Self {
            prototype: prototype.into(),
            extra: Map::new(),
        }
    }
}
