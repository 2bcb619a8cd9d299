//! File indexes along three independent axes: language, complexity, purpose.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::language;
use crate::report::RawDeclarationReport;

/// Highest symbol count still considered simple.
pub const SIMPLE_MAX_SYMBOLS: usize = 5;

/// Highest symbol count still considered medium.
pub const MEDIUM_MAX_SYMBOLS: usize = 15;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileIndex {
    pub by_language: BTreeMap<String, Vec<String>>,
    pub by_complexity: ComplexityBuckets,
    pub by_purpose: PurposeIndex,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplexityBuckets {
    pub simple: Vec<String>,
    pub medium: Vec<String>,
    pub complex: Vec<String>,
}

impl ComplexityBuckets {
    fn bucket_mut(&mut self, complexity: Complexity) -> &mut Vec<String> {
        match complexity {
            Complexity::Simple => &mut self.simple,
            Complexity::Medium => &mut self.medium,
            Complexity::Complex => &mut self.complex,
        }
    }
}

/// Files whose purpose mentions an entry point or tests.
///
/// The two lists are filled independently; a file can appear in both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PurposeIndex {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub main: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    #[must_use]
    pub const fn for_symbol_count(count: usize) -> Self {
        if count <= SIMPLE_MAX_SYMBOLS {
            Self::Simple
        } else if count <= MEDIUM_MAX_SYMBOLS {
            Self::Medium
        } else {
            Self::Complex
        }
    }
}

/// `(is_main, is_test)` for a purpose text, case-insensitive.
#[must_use]
pub fn purpose_tags(purpose: &str) -> (bool, bool) {
    let purpose = purpose.to_lowercase();
    let is_main = purpose.contains("main") || purpose.contains("entry");
    let is_test = purpose.contains("test");
    (is_main, is_test)
}

#[must_use]
pub fn build_index(report: &RawDeclarationReport) -> FileIndex {
    let mut index = FileIndex::default();

    for (path, record) in &report.files {
        if let Some(label) = language::detect_path(path) {
            index
                .by_language
                .entry(label.to_string())
                .or_default()
                .push(path.clone());
        }

        index
            .by_complexity
            .bucket_mut(Complexity::for_symbol_count(record.symbol_count()))
            .push(path.clone());

        let (is_main, is_test) = purpose_tags(&record.purpose);
        if is_main {
            index.by_purpose.main.push(path.clone());
        }
        if is_test {
            index.by_purpose.test.push(path.clone());
        }
    }

    index
}
