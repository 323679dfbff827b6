//! Config sources: workspace files and environment variables.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::{Path, PathBuf};

/// Name of the workspace-level config file
pub const WORKSPACE_CONFIG_FILE: &str = "flow-manifest.toml";

/// Prefix for environment overrides, e.g. `FLOW_MANIFEST__ROOT`
pub const ENV_PREFIX: &str = "FLOW_MANIFEST";

/// Path to the workspace config file.
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(WORKSPACE_CONFIG_FILE)
}

/// Add workspace config files to builder.
/// Precedence: flow-manifest.toml (base) then config/{FLOW_MANIFEST_ENV}.toml (env-specific).
pub fn add_workspace_files(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    let env_name = std::env::var("FLOW_MANIFEST_ENV").unwrap_or_else(|_| "development".to_string());
    let mut builder = builder;

    let base_config_path = workspace_config_path(workspace_root);
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    let env_config_path = workspace_root
        .join("config")
        .join(format!("{}.toml", env_name));
    if env_config_path.exists() {
        builder = builder.add_source(File::from(env_config_path).required(false));
    }

    builder
}

/// Add an explicitly requested config file; it must exist.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(true))
}

/// Add `FLOW_MANIFEST__*` environment overrides (nested keys use `__`).
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    )
}
