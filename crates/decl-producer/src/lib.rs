//! # decl-producer
//!
//! Acquisition of raw declaration reports from the `contextgen` producer.
//!
//! - [`ReportSource`] is the capability: "give me the whole-project report".
//! - [`ProducerCommand`] satisfies it by running the producer executable,
//!   located per [`locate_producer`], and reading the JSON file it writes.
//! - [`ReportAcquirer`] bounds each run with the configured timeout and
//!   narrows the report for single-file requests.
//!
//! Nothing is retried; every failure surfaces as an [`AcquireError`].

mod command;
mod error;
mod locate;
mod scope;
mod source;

pub use command::ProducerCommand;
pub use error::AcquireError;
pub use locate::locate_producer;
pub use scope::{AcquireScope, ResolvedFile, resolve_file};
pub use source::{ReportAcquirer, ReportSource};
