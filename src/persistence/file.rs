//! JSON-file key-value store.
//!
//! The whole store is one JSON object mapping keys to JSON-encoded strings,
//! the same shape a browser keeps in local storage. Writes go through a temp
//! file and an atomic rename so the file is never left half-written.

use super::KeyValueStore;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key-value store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store at `path`. The file is created lazily on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every entry. A missing file is an empty store.
    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match self.read_content()? {
            Some(content) => parse_entries(&content)
                .with_context(|| format!("Failed to parse storage file: {}", self.path.display())),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Raw file content, or `None` when the file is missing or blank.
    fn read_content(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {}", self.path.display()))?;

        Ok(Some(content).filter(|c| !c.trim().is_empty()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize storage entries")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp storage file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp storage file to: {}", self.path.display())
        })?;

        debug!("Wrote {} storage entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Entries to start a write from. A file that is not valid JSON is
    /// replaced rather than blocking every future write; read failures are
    /// returned so existing entries are never dropped.
    fn entries_for_update(&self) -> Result<BTreeMap<String, String>> {
        let Some(content) = self.read_content()? else {
            return Ok(BTreeMap::new());
        };

        Ok(parse_entries(&content).unwrap_or_else(|e| {
            warn!(
                "Discarding corrupt storage file {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        }))
    }
}

fn parse_entries(content: &str) -> serde_json::Result<BTreeMap<String, String>> {
    serde_json::from_str(content)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
