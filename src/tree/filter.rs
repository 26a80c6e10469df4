//! Name-based exclusion filters

use std::path::Path;

/// Check if a directory should be excluded. Exact, case-sensitive match.
pub fn should_exclude_folder(name: &str, exclude_folders: &[String]) -> bool {
    exclude_folders.iter().any(|folder| folder == name)
}

/// Check if a file should be excluded by exact name or by extension.
///
/// Extension entries are matched as a case-insensitive suffix of the whole name,
/// so `".exe"` excludes `OLD.EXE` and a bare `"e"` excludes anything ending in `e`.
pub fn should_exclude_file(
    name: &str,
    exclude_extensions: &[String],
    exclude_names: &[String],
) -> bool {
    if exclude_names.iter().any(|excluded| excluded == name) {
        return true;
    }

    let lower = name.to_lowercase();
    exclude_extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Lowercased extension including the leading dot, or "" when there is none.
///
/// Dotfiles without a further dot (`.hidden`) have no extension.
pub fn file_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
