//! Manifest builder: walks the flows root and assembles the manifest in memory

use super::{FlowRecord, Manifest, TabRecord};
use crate::config::{
    default_description_file, default_instructions_file, default_tab_extension, ManifestConfig,
};
use crate::error::ManifestError;
use crate::scan::walker::Walker;
use crate::scan::{is_tab_candidate, reader, tab_name};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds a [`Manifest`] from a flows root directory
pub struct ManifestBuilder {
    /// Root directory on disk
    root_dir: PathBuf,
    /// Root as written into tab `file` entries
    root_label: String,
    description_file: String,
    instructions_file: String,
    tab_extension: String,
    walker: Walker,
}

impl ManifestBuilder {
    pub fn new(root_dir: impl Into<PathBuf>, root_label: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            root_label: root_label.into(),
            description_file: default_description_file(),
            instructions_file: default_instructions_file(),
            tab_extension: default_tab_extension(),
            walker: Walker::new(),
        }
    }

    /// Builder for a configuration, with the root resolved against `workspace`
    pub fn from_config(config: &ManifestConfig, workspace: &Path) -> Self {
        Self::new(config.resolve_root(workspace), config.root_label())
            .with_reserved(&config.description_file, &config.instructions_file)
            .with_extension(config.tab_extension())
    }

    pub fn with_reserved(mut self, description_file: &str, instructions_file: &str) -> Self {
        self.description_file = description_file.to_string();
        self.instructions_file = instructions_file.to_string();
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.tab_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Scan every flow folder under the root, in name order.
    ///
    /// The root must exist; unreadable individual files are logged and read as empty.
    pub fn build(&self) -> Result<Manifest, ManifestError> {
        let mut manifest = Manifest::new();

        for entry in self.walker.list(&self.root_dir)? {
            if !entry.is_dir() {
                continue;
            }

            let flow = self.build_flow(&entry.name, &entry.path)?;
            let tab_count = flow.tabs.len();
            if manifest.push(flow) {
                debug!(flow = %entry.name, tabs = tab_count, "Added flow");
            } else {
                debug!(flow = %entry.name, "Skipped flow without content");
            }
        }

        Ok(manifest)
    }

    fn build_flow(&self, name: &str, folder: &Path) -> Result<FlowRecord, ManifestError> {
        let description = reader::read_trimmed(&folder.join(&self.description_file));
        let instructions = reader::read_trimmed(&folder.join(&self.instructions_file));

        let reserved = [
            self.description_file.as_str(),
            self.instructions_file.as_str(),
        ];
        let mut tabs = Vec::new();
        for entry in self.walker.list(folder)? {
            // unreadable entries stay: the read below logs them and yields ""
            let listed = entry.is_file() || entry.is_unreadable();
            if !listed || !is_tab_candidate(&entry.name, &reserved, &self.tab_extension) {
                continue;
            }

            tabs.push(TabRecord {
                tab_name: tab_name(&entry.name),
                file: format!("{}/{}/{}", self.root_label, name, entry.name),
                description: reader::read_first_line(&entry.path),
            });
        }

        Ok(FlowRecord {
            name: name.to_string(),
            description,
            instructions,
            tabs,
        })
    }
}
