//! Integration tests for the flow manifest generator

mod cli_binary;
mod config_integration;
mod manifest_generation;
