//! Change events attached to update records.
//!
//! No structural diff is computed: an update always yields a single
//! `declaration_update` event. Callers needing a real diff compare against
//! their own prior snapshot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::report::RawDeclarationReport;

pub const DECLARATION_UPDATE_DESCRIPTION: &str = "file declarations updated";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    DeclarationUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChangeEvent {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub description: String,
    pub timestamp: String,
}

#[must_use]
pub fn record_update(declarations: &RawDeclarationReport) -> Vec<ChangeEvent> {
    tracing::debug!(
        files = declarations.file_count(),
        "recording declaration update"
    );
    vec![ChangeEvent {
        kind: ChangeKind::DeclarationUpdate,
        description: DECLARATION_UPDATE_DESCRIPTION.to_string(),
        timestamp: clock::now(),
    }]
}
