//! Manifest serialization: 4-space indented JSON with non-ASCII text kept literal

use super::Manifest;
use crate::error::ManifestError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const INDENT: &[u8] = b"    ";

impl Manifest {
    /// Render the manifest as indented JSON without a trailing newline.
    pub fn to_json_string(&self) -> Result<String, ManifestError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Write the manifest to `path` in full, replacing any previous content.
///
/// Missing parent directories are created. Any I/O failure is fatal.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let json = manifest.to_json_string()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}
