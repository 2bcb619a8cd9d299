//! JSON Schemas of the producer report and the persisted artifacts.

use schemars::schema_for;
use serde_json::Value;

use crate::artifacts::{EnrichedReport, FileReport, ProjectDeclarations, UpdateRecord};
use crate::errors::CoreError;
use crate::report::RawDeclarationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    RawReport,
    EnrichedReport,
    FileReport,
    ProjectDeclarations,
    UpdateRecord,
}

impl Artifact {
    pub const ALL: [Self; 5] = [
        Self::RawReport,
        Self::EnrichedReport,
        Self::FileReport,
        Self::ProjectDeclarations,
        Self::UpdateRecord,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RawReport => "raw-report",
            Self::EnrichedReport => "enriched-report",
            Self::FileReport => "file-report",
            Self::ProjectDeclarations => "project-declarations",
            Self::UpdateRecord => "update-record",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|artifact| artifact.name() == name)
            .ok_or_else(|| CoreError::UnknownArtifact(name.to_string()))
    }

    pub fn schema(self) -> Result<Value, CoreError> {
        let schema = match self {
            Self::RawReport => schema_for!(RawDeclarationReport),
            Self::EnrichedReport => schema_for!(EnrichedReport),
            Self::FileReport => schema_for!(FileReport),
            Self::ProjectDeclarations => schema_for!(ProjectDeclarations),
            Self::UpdateRecord => schema_for!(UpdateRecord),
        };
        Ok(serde_json::to_value(schema)?)
    }
}
