//! Shared test fixtures for catalog and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use devshelf::data::seed_tools;
use devshelf::models::{Category, ToolDraft};
use devshelf::persistence::{MemoryStore, Preferences};
use devshelf::services::CatalogStore;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the devshelf binary (set by cargo at compile time)
pub fn devshelf_bin() -> &'static str {
    env!("CARGO_BIN_EXE_devshelf")
}

/// Creates a Command with an isolated config directory.
///
/// Preferences default to `storage.json` inside the same directory, so
/// sharing `config_dir` between commands shares likes and saves.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(devshelf_bin());
    cmd.env("DEVSHELF_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in `config_dir` and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command expected to print JSON and parses stdout.
pub fn run_json(args: &[&str], config_dir: &Path) -> serde_json::Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {:?} failed. stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Fresh temporary config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Catalog over the seed data with an empty in-memory preference store.
pub fn seeded_store() -> CatalogStore<MemoryStore> {
    CatalogStore::new(
        seed_tools().expect("seed catalog parses"),
        Preferences::new(MemoryStore::new()),
    )
}

/// A valid submission draft.
pub fn sample_draft(name: &str) -> ToolDraft {
    ToolDraft {
        name: name.to_string(),
        description: "Blazing fast package manager for JavaScript".to_string(),
        category: Category::CliTools,
        image_url: "https://example.com/tool.png".to_string(),
        github_url: "https://github.com/example/tool".to_string(),
        demo_url: None,
        tags: vec!["Package Manager".to_string(), "Node".to_string()],
        author: "You".to_string(),
        screenshots: None,
        featured: None,
    }
}

/// IDs of the `tools` array in a JSON response.
pub fn json_ids(value: &serde_json::Value) -> Vec<String> {
    value["tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .map(|t| t["id"].as_str().expect("id string").to_string())
        .collect()
}
