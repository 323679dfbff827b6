//! Flow manifest records
//!
//! A [`Manifest`] is the ordered list of [`FlowRecord`]s serialized as a JSON array.

pub mod builder;
pub mod writer;

pub use builder::ManifestBuilder;
pub use writer::write_manifest;

use serde::{Deserialize, Serialize};

/// One tab file inside a flow folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRecord {
    /// File name without extension
    pub tab_name: String,
    /// `<root>/<folder>/<file>`, always with forward slashes
    pub file: String,
    /// Trimmed first line of the file
    pub description: String,
}

/// One flow folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub tabs: Vec<TabRecord>,
}

impl FlowRecord {
    /// A flow is published when it has at least one tab, a description or instructions.
    pub fn is_publishable(&self) -> bool {
        !self.tabs.is_empty() || !self.description.is_empty() || !self.instructions.is_empty()
    }
}

/// Ordered list of flows, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    flows: Vec<FlowRecord>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flow, keeping it only if it is publishable. Returns whether it was kept.
    pub fn push(&mut self, flow: FlowRecord) -> bool {
        if flow.is_publishable() {
            self.flows.push(flow);
            true
        } else {
            false
        }
    }

    pub fn flows(&self) -> &[FlowRecord] {
        &self.flows
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
