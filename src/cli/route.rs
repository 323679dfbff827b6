//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_flow_list_json, format_flow_list_text};
use crate::config::{ConfigLoader, ManifestConfig};
use crate::error::ManifestError;
use crate::generate::{generate, GenerateOptions};
use crate::manifest::ManifestBuilder;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution: workspace root and the effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ManifestConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ManifestError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: ManifestConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    /// Apply `--root` / `--output` overrides.
    pub fn with_overrides(mut self, root: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(root) = root {
            self.config.root = root;
        }
        if let Some(output) = output {
            self.config.output = output;
        }
        self
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Execute a command and return the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ManifestError> {
        debug!(?command, workspace = %self.workspace_root.display(), "Executing command");
        match command {
            Commands::Generate { dry_run } => {
                let options = GenerateOptions { dry_run: *dry_run };
                generate(&self.config, &self.workspace_root, &options)?.summary()
            }
            Commands::List { format } => self.handle_list(format),
            Commands::Config => self.config.to_toml_string(),
        }
    }

    fn handle_list(&self, format: &str) -> Result<String, ManifestError> {
        self.config.validate()?;
        let root_label = self.config.root.display().to_string();
        let builder = ManifestBuilder::from_config(&self.config, &self.workspace_root);

        if !builder.root_dir().is_dir() {
            return Ok(format!("Flows directory '{}' does not exist.", root_label));
        }

        let manifest = builder.build()?;
        match format {
            "json" => format_flow_list_json(&manifest),
            "text" => Ok(format_flow_list_text(&manifest, &root_label)),
            other => Err(ManifestError::Config(format!(
                "Invalid list format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}
