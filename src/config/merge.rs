//! Merge rules: defaults and override order.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("root", "flows")?
        .set_default("output", "flows.json")?
        .set_default("description_file", "description.txt")?
        .set_default("instructions_file", "instructions.txt")?
        .set_default("tab_extension", "txt")
}
