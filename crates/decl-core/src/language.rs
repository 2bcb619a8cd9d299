//! File extension to language label lookup.

use std::path::Path;

const LANGUAGES: &[(&str, &str)] = &[
    (".go", "Go"),
    (".js", "JavaScript"),
    (".jsx", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".py", "Python"),
    (".java", "Java"),
    (".cs", "C#"),
    (".rs", "Rust"),
    (".cpp", "C++"),
    (".cc", "C++"),
    (".cxx", "C++"),
    (".hpp", "C++"),
    (".c", "C"),
    (".h", "C"),
];

/// Language label for a dotted extension such as `".go"`.
///
/// The table is matched exactly; callers lower-case first (see [`extension_of`]).
#[must_use]
pub fn detect(extension: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, label)| *label)
}

/// Lower-cased dotted extension of a report path, `""` when there is none.
#[must_use]
pub fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Language of a report path, if its extension is known.
#[must_use]
pub fn detect_path(path: &str) -> Option<&'static str> {
    detect(&extension_of(path))
}
