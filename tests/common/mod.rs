//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Write a config file with the given TOML content into a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
