//! Default artifact file names, resolved against the project root.

use serde::{Deserialize, Serialize};

fn default_all() -> String {
    "all_declarations.json".to_string()
}

fn default_file() -> String {
    "file_declarations.json".to_string()
}

fn default_project() -> String {
    "project_declarations.json".to_string()
}

fn default_update() -> String {
    "updated_declarations.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// `get-all` artifact.
    #[serde(default = "default_all")]
    pub all: String,

    /// `get-file` artifact.
    #[serde(default = "default_file")]
    pub file: String,

    /// `create-project` artifact.
    #[serde(default = "default_project")]
    pub project: String,

    /// `update-file` artifact.
    #[serde(default = "default_update")]
    pub update: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            all: default_all(),
            file: default_file(),
            project: default_project(),
            update: default_update(),
        }
    }
}
