use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use decl_core::CoreError;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write the enriched whole-project report.
    GetAll(GetAllArgs),
    /// Write the report for a single file.
    GetFile(GetFileArgs),
    /// Write the project artifact with summary and file indexes.
    CreateProject(CreateProjectArgs),
    /// Write an update record for a single file.
    UpdateFile(UpdateFileArgs),
    /// Print the JSON Schema of an artifact.
    Schema(SchemaArgs),
}

impl Commands {
    /// Reject missing required arguments before any producer is looked up.
    pub fn check_usage(&self) -> Result<(), CoreError> {
        match self {
            Self::GetFile(args) => args.target.required("get-file").map(|_| ()),
            Self::UpdateFile(args) => args.target.required("update-file").map(|_| ()),
            Self::GetAll(_) | Self::CreateProject(_) | Self::Schema(_) => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct FileTarget {
    /// File to report on, absolute or relative to the project root
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl FileTarget {
    pub fn required(&self, action: &str) -> Result<&Path, CoreError> {
        self.file
            .as_deref()
            .ok_or_else(|| CoreError::Usage(format!("{action} requires --file <PATH>")))
    }
}

#[derive(Clone, Debug, Args)]
pub struct GetAllArgs {
    /// Output file (relative paths resolve against the project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accepted for compatibility; reports are never cached
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Clone, Debug, Args)]
pub struct GetFileArgs {
    #[command(flatten)]
    pub target: FileTarget,

    /// Output file (relative paths resolve against the project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accepted for compatibility; reports are never cached
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CreateProjectArgs {
    /// Output file (relative paths resolve against the project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateFileArgs {
    #[command(flatten)]
    pub target: FileTarget,

    /// Output file (relative paths resolve against the project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// raw-report, enriched-report, file-report, project-declarations or update-record
    pub artifact: String,
}
