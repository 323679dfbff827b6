//! Configuration System
//!
//! Layered configuration for the generator: built-in defaults, an optional
//! `flow-manifest.toml` in the workspace, an optional per-environment file and
//! `FLOW_MANIFEST__*` environment variables. CLI flags are applied on top by the binary.

use crate::error::ManifestError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Directory holding one sub-folder per flow
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Manifest output path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Reserved file holding the flow description
    #[serde(default = "default_description_file")]
    pub description_file: String,

    /// Reserved file holding the flow instructions
    #[serde(default = "default_instructions_file")]
    pub instructions_file: String,

    /// Extension (without the dot) that marks a tab file, matched case-insensitively
    #[serde(default = "default_tab_extension")]
    pub tab_extension: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub(crate) fn default_root() -> PathBuf {
    PathBuf::from("flows")
}

pub(crate) fn default_output() -> PathBuf {
    PathBuf::from("flows.json")
}

pub(crate) fn default_description_file() -> String {
    "description.txt".to_string()
}

pub(crate) fn default_instructions_file() -> String {
    "instructions.txt".to_string()
}

pub(crate) fn default_tab_extension() -> String {
    "txt".to_string()
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            description_file: default_description_file(),
            instructions_file: default_instructions_file(),
            tab_extension: default_tab_extension(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ManifestConfig {
    /// Validate the configuration, reporting every problem at once
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut errors = Vec::new();

        if self.root.as_os_str().is_empty() {
            errors.push("root cannot be empty".to_string());
        }
        if self.output.as_os_str().is_empty() {
            errors.push("output cannot be empty".to_string());
        }
        if self.description_file.trim().is_empty() {
            errors.push("description_file cannot be empty".to_string());
        }
        if self.instructions_file.trim().is_empty() {
            errors.push("instructions_file cannot be empty".to_string());
        }
        if self.description_file == self.instructions_file {
            errors.push(format!(
                "description_file and instructions_file must differ (both '{}')",
                self.description_file
            ));
        }
        if self.tab_extension.trim_start_matches('.').is_empty() {
            errors.push("tab_extension cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ManifestError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }

    /// Flows directory on disk; relative roots resolve against the workspace
    pub fn resolve_root(&self, workspace: &Path) -> PathBuf {
        resolve_against(workspace, &self.root)
    }

    /// Manifest path on disk; relative outputs resolve against the workspace
    pub fn resolve_output(&self, workspace: &Path) -> PathBuf {
        resolve_against(workspace, &self.output)
    }

    /// Root as it appears in manifest `file` entries: forward slashes, no trailing slash
    pub fn root_label(&self) -> String {
        let mut label = self.root.to_string_lossy().replace('\\', "/");
        while label.len() > 1 && label.ends_with('/') {
            label.pop();
        }
        label
    }

    /// Tab extension without any leading dot
    pub fn tab_extension(&self) -> &str {
        self.tab_extension.trim_start_matches('.')
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ManifestError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn resolve_against(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}
