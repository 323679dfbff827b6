//! flow-manifest: Flow Folder Aggregation
//!
//! Scans a root directory of flow folders, each holding optional description and
//! instruction files plus any number of tab text files, and writes them out as a
//! single ordered JSON manifest. Output is deterministic for an unchanged tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod manifest;
pub mod scan;
