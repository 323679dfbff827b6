//! Presentation: formatters for the `list` command.

use crate::error::ManifestError;
use crate::manifest::Manifest;
use serde_json::json;

pub fn format_flow_list_text(manifest: &Manifest, root: &str) -> String {
    if manifest.is_empty() {
        return format!("No flows found in '{}'.", root);
    }

    let mut lines = vec![format!("Flows in '{}' ({}):", root, manifest.len())];
    for flow in manifest.flows() {
        let mut parts = vec![format!("{} tab(s)", flow.tabs.len())];
        if !flow.description.is_empty() {
            parts.push("description".to_string());
        }
        if !flow.instructions.is_empty() {
            parts.push("instructions".to_string());
        }
        lines.push(format!("  {} [{}]", flow.name, parts.join(", ")));
    }
    lines.join("\n")
}

pub fn format_flow_list_json(manifest: &Manifest) -> Result<String, ManifestError> {
    let flows: Vec<_> = manifest
        .flows()
        .iter()
        .map(|flow| {
            json!({
                "name": flow.name,
                "tabs": flow.tabs.len(),
                "hasDescription": !flow.description.is_empty(),
                "hasInstructions": !flow.instructions.is_empty(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&flows)?)
}
