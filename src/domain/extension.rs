//! File name suffix rules shared by pruning and sorting.

use std::path::Path;

/// Extension used for bucketing: the text after the last `.` of the file name.
///
/// Names starting with a dot and nothing else (`.bashrc`) and names ending in a
/// dot (`notes.`) have no extension.
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str()).filter(|ext| !ext.is_empty())
}

/// Exact, case-sensitive suffix match on the file name.
///
/// Compares raw bytes, so names that are not valid UTF-8 still match.
pub fn name_ends_with(path: &Path, suffix: &str) -> bool {
    path.file_name().is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}

/// Whether the file name has an extension that `extension_of` cannot return.
pub fn has_non_utf8_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.to_str().is_none())
}

/// Check an extension filter supplied by configuration.
pub fn validate_extension_filter(extension: &str) -> Result<(), String> {
    if extension.trim().is_empty() {
        return Err("log_extension must not be empty".to_string());
    }
    if extension.starts_with('.') {
        return Err(format!("log_extension '{}' must not start with '.'", extension));
    }
    if extension.contains(['/', '\\']) {
        return Err(format!("log_extension '{}' must not contain path separators", extension));
    }
    Ok(())
}
