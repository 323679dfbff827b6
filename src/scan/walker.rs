//! Single-level directory listing with deterministic ordering

use crate::error::ManifestError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Kind of a listed entry. Symlinks are followed, so they report their target's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Present in the listing but its metadata could not be read, e.g. a dangling symlink
    Unreadable,
    /// Sockets, fifos and devices
    Other,
}

/// A direct child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// File name of the entry
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ScanEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_unreadable(&self) -> bool {
        self.kind == EntryKind::Unreadable
    }
}

/// Lists the immediate children of a directory
#[derive(Debug, Default)]
pub struct Walker;

impl Walker {
    pub fn new() -> Self {
        Self
    }

    /// List the entries directly inside `dir`, sorted by file name.
    ///
    /// Failing to read `dir` itself is fatal. A child whose metadata cannot be read
    /// is still listed, as [`EntryKind::Unreadable`], so callers decide what it means.
    pub fn list(&self, dir: &Path) -> Result<Vec<ScanEntry>, ManifestError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ManifestError::Io {
                        path: dir.to_path_buf(),
                        source: e.into_io_error().unwrap_or_else(|| {
                            std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                        }),
                    });
                }
                Err(e) => {
                    debug!(path = ?e.path(), error = %e, "Directory entry metadata unreadable");
                    if let Some(path) = e.path() {
                        if let Some(name) = path.file_name() {
                            entries.push(ScanEntry {
                                name: name.to_string_lossy().into_owned(),
                                path: path.to_path_buf(),
                                kind: EntryKind::Unreadable,
                            });
                        }
                    }
                    continue;
                }
            };

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(ScanEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.into_path(),
                kind,
            });
        }

        // children share a parent, so path order is file name order
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
