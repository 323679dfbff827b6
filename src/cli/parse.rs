//! CLI parse: clap types for flow-manifest. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flow-manifest - Aggregate flow folders into a JSON manifest
#[derive(Parser, Debug)]
#[command(name = "flow-manifest")]
#[command(about = "Aggregate flow folders of description, instruction and tab files into a JSON manifest")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace directory that relative paths resolve against
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Flows root directory (overrides config)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Manifest output path (overrides config)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; `generate` when none is given
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Generate { dry_run: false })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan the flows directory and write the manifest (default)
    Generate {
        /// Print the manifest instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// List the flows that would be published, without writing anything
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}
