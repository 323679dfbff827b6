//! Config facade: single entry point for loading the generator configuration.

use super::merge::builder_with_defaults;
use super::sources;
use super::ManifestConfig;
use config::ConfigError;
use std::path::Path;
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, `flow-manifest.toml`,
    /// `config/{FLOW_MANIFEST_ENV}.toml`, `FLOW_MANIFEST__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<ManifestConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = sources::add_workspace_files(builder, workspace_root);
        let builder = sources::add_environment(builder);

        let config: ManifestConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded workspace configuration");
        Ok(config)
    }

    /// Load configuration from an explicit file, still honoring environment overrides.
    pub fn load_from_file(path: &Path) -> Result<ManifestConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = sources::add_explicit_file(builder, path);
        let builder = sources::add_environment(builder);

        let config: ManifestConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded configuration file");
        Ok(config)
    }
}
