//! Persistence adapter for user preferences.
//!
//! Storage is modelled as a fallible string key-value interface
//! ([`KeyValueStore`]) whose values are JSON documents. [`Preferences`] layers
//! typed access on top of it with a fallback-to-default read policy: a key
//! that is absent, unparsable, or unreadable yields the empty/default value
//! and a warning in the log, never an error.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::constants::{DARK_MODE_KEY, LIKED_TOOLS_KEY, SAVED_TOOLS_KEY, USER_TOOLS_KEY};
use crate::models::Tool;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// String-keyed storage of JSON-serialized values.
///
/// Implementations may be backed by memory, a file, an embedded database, or
/// a remote store; the catalog only relies on this contract.
pub trait KeyValueStore {
    /// Reads the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Typed preference access over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Liked tool IDs, in the order they were liked.
    pub fn liked_tools(&self) -> Vec<String> {
        dedup_ids(self.read_or_default(LIKED_TOOLS_KEY))
    }

    /// Persists the liked tool IDs.
    pub fn set_liked_tools(&mut self, ids: &[String]) -> Result<()> {
        self.write(LIKED_TOOLS_KEY, &ids)
    }

    /// Saved (bookmarked) tool IDs, in the order they were saved.
    pub fn saved_tools(&self) -> Vec<String> {
        dedup_ids(self.read_or_default(SAVED_TOOLS_KEY))
    }

    /// Persists the saved tool IDs.
    pub fn set_saved_tools(&mut self, ids: &[String]) -> Result<()> {
        self.write(SAVED_TOOLS_KEY, &ids)
    }

    /// Dark mode flag; `false` when never set.
    pub fn dark_mode(&self) -> bool {
        self.read_or_default(DARK_MODE_KEY)
    }

    /// Persists the dark mode flag.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.write(DARK_MODE_KEY, &enabled)
    }

    /// User-submitted tools.
    pub fn user_tools(&self) -> Vec<Tool> {
        self.read_or_default(USER_TOOLS_KEY)
    }

    /// Persists user-submitted tools.
    pub fn set_user_tools(&mut self, tools: &[Tool]) -> Result<()> {
        self.write(USER_TOOLS_KEY, &tools)
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!("Failed to read '{}' from storage, using default: {:#}", key, e);
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring malformed value for '{}': {}", key, e);
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for '{key}'"))?;
        self.store
            .set(key, &raw)
            .with_context(|| format!("Failed to write '{key}' to storage"))
    }
}

/// Drops repeated IDs, keeping the first occurrence.
fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
