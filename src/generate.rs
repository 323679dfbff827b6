//! Generation run: missing-root setup, manifest build, manifest write.

use crate::config::ManifestConfig;
use crate::error::ManifestError;
use crate::manifest::{write_manifest, Manifest, ManifestBuilder};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Options for a single run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Build the manifest but do not write it
    pub dry_run: bool,
}

/// What a run did
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The flows root was missing and has been created empty; nothing was written
    RootCreated {
        /// Root as configured
        root: String,
    },
    /// The manifest was written
    Written {
        /// Output as configured
        output: String,
        flows: usize,
    },
    /// The manifest was built but not written
    DryRun { manifest: Manifest },
}

impl GenerateOutcome {
    /// Console text for the outcome
    pub fn summary(&self) -> Result<String, ManifestError> {
        match self {
            GenerateOutcome::RootCreated { root, .. } => Ok(format!(
                "Error: The directory '{}' does not exist.\nCreated an empty '{}' directory for you.",
                root, root
            )),
            GenerateOutcome::Written { output, flows } => Ok(format!(
                "Successfully generated {} with {} flow(s).",
                output, flows
            )),
            GenerateOutcome::DryRun { manifest } => manifest.to_json_string(),
        }
    }
}

/// Make sure the flows root exists.
///
/// Returns `true` when it had to be created. A path occupied by something that is
/// not a directory cannot be created and is fatal.
pub fn ensure_root(root_dir: &Path) -> Result<bool, ManifestError> {
    if root_dir.is_dir() {
        return Ok(false);
    }

    std::fs::create_dir_all(root_dir).map_err(|source| ManifestError::RootSetup {
        path: root_dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Run the generator for `config`, with relative paths resolved against `workspace`.
///
/// The manifest is assembled completely in memory before the output file is touched.
pub fn generate(
    config: &ManifestConfig,
    workspace: &Path,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, ManifestError> {
    config.validate()?;

    let started = Instant::now();
    let root_dir = config.resolve_root(workspace);
    let root = config.root.display().to_string();

    if ensure_root(&root_dir)? {
        warn!(root = %root, "Flows directory does not exist");
        info!(path = %root_dir.display(), "Created empty flows directory");
        return Ok(GenerateOutcome::RootCreated { root });
    }

    let manifest = ManifestBuilder::from_config(config, workspace).build()?;

    if options.dry_run {
        info!(flows = manifest.len(), "Built manifest (dry run, nothing written)");
        return Ok(GenerateOutcome::DryRun { manifest });
    }

    let output_path = config.resolve_output(workspace);
    write_manifest(&manifest, &output_path)?;

    info!(
        output = %output_path.display(),
        flows = manifest.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Wrote flow manifest"
    );

    Ok(GenerateOutcome::Written {
        output: config.output.display().to_string(),
        flows: manifest.len(),
    })
}
