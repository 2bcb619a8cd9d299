//! Human-readable summaries printed after `create-project` and `update-file`.

use decl_core::artifacts::{ProjectDeclarations, UpdateAction, UpdateRecord};

pub fn project_summary(project: &ProjectDeclarations) -> String {
    let languages = if project.summary.languages.is_empty() {
        "none".to_string()
    } else {
        project
            .summary
            .languages
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Project: {}\nFiles: {}\nSymbols: {}\nLanguages: {languages}\nHigh-complexity files: {}",
        project.project_info.name,
        project.summary.total_files,
        project.summary.total_symbols,
        project.summary.complexity_analysis.high_complexity_files.len()
    )
}

pub fn update_summary(record: &UpdateRecord) -> String {
    let action = match record.action {
        UpdateAction::Update => "update",
    };

    format!(
        "File: {}\nTimestamp: {}\nAction: {action}\nChanges: {}",
        record.file_name,
        record.timestamp,
        record.changes.len()
    )
}
