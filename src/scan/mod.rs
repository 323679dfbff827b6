//! Flow folder scanning
//!
//! Sorted single-level directory listing, tab file selection and tolerant file reads.

pub mod reader;
pub mod walker;

use std::path::Path;

/// Whether `file_name` is a tab file: ends in `.{extension}` (case-insensitive)
/// and is not one of the reserved metadata file names (exact match).
pub fn is_tab_candidate(file_name: &str, reserved: &[&str], extension: &str) -> bool {
    let suffix = format!(".{}", extension.to_lowercase());
    file_name.to_lowercase().ends_with(&suffix) && !reserved.contains(&file_name)
}

/// Display name of a tab: the file name without its last extension.
pub fn tab_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}
