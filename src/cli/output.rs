//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ManifestError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ManifestError) -> String {
    match e {
        ManifestError::Config(msg) => format!("Configuration error: {}", msg),
        other => format!("Error: {}", other),
    }
}

/// Process exit code for a failed run. Config problems use 2, everything else 1.
pub fn exit_code(e: &ManifestError) -> i32 {
    match e {
        ManifestError::Config(_) => 2,
        _ => 1,
    }
}
