//! # decl-core
//!
//! Declaration report model and the enrichment engine for declmgr.
//!
//! The producer (`contextgen generate`) emits a raw per-file declaration
//! report. This crate turns that report into the artifacts written by the
//! `declmgr` binary:
//! - Report model passed through from the producer ([`report`])
//! - Symbol classification by prototype text ([`classify`])
//! - Extension to language lookup ([`language`])
//! - Project-wide and single-file summaries ([`summary`])
//! - Language / complexity / purpose indexes ([`index`])
//! - Update change events ([`changes`])
//! - Persisted artifact envelopes and their JSON Schemas ([`artifacts`], [`schema`])

pub mod artifacts;
pub mod changes;
pub mod classify;
pub mod clock;
pub mod errors;
pub mod index;
pub mod language;
pub mod persist;
pub mod report;
pub mod schema;
pub mod summary;

pub use errors::CoreError;
pub use report::{FileRecord, RawDeclarationReport, SymbolDescriptor};
