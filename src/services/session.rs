//! Wiring of configuration, storage, and the catalog store for one run.

use crate::config::Config;
use crate::data::seed_tools;
use crate::models::{Tool, ToolDraft};
use crate::persistence::{FileStore, KeyValueStore, MemoryStore, Preferences};
use crate::services::catalog::CatalogStore;
use crate::services::debounce::Debouncer;
use anyhow::{Context, Result};
use tracing::debug;

/// Storage backend chosen at startup.
#[derive(Debug, Clone)]
pub enum SessionStore {
    /// Preferences persisted to the configured data file
    File(FileStore),
    /// Preferences discarded when the process exits
    Memory(MemoryStore),
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            Self::File(store) => store.remove(key),
            Self::Memory(store) => store.remove(key),
        }
    }
}

/// A configured catalog plus the settings it was opened with.
#[derive(Debug)]
pub struct Session {
    config: Config,
    catalog: CatalogStore<SessionStore>,
}

impl Session {
    /// Opens a session backed by the configured data file, or by memory when
    /// `ephemeral` is set.
    pub fn open(config: Config, ephemeral: bool) -> Result<Self> {
        let store = if ephemeral {
            SessionStore::Memory(MemoryStore::new())
        } else {
            SessionStore::File(FileStore::open(&config.storage.data_file))
        };
        Self::with_store(config, store)
    }

    /// Opens a session over an explicit store.
    pub fn with_store(config: Config, store: SessionStore) -> Result<Self> {
        let seed = seed_tools().context("Failed to load seed catalog")?;
        let mut catalog = CatalogStore::new(seed, Preferences::new(store))
            .with_page_size(config.browse.page_size)
            .with_trending_limit(config.browse.trending_limit);

        if config.catalog.persist_submissions {
            let stored = catalog.preferences().user_tools();
            debug!("Restoring {} submitted tools", stored.len());
            catalog.prepend_tools(stored);
        }

        Ok(Self { config, catalog })
    }

    /// Settings the session was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The catalog store.
    pub fn catalog(&self) -> &CatalogStore<SessionStore> {
        &self.catalog
    }

    /// Mutable access to the catalog store.
    pub fn catalog_mut(&mut self) -> &mut CatalogStore<SessionStore> {
        &mut self.catalog
    }

    /// Adds a tool to the catalog and, when `persist_submissions` is enabled,
    /// records it in the user tools list.
    pub fn submit(&mut self, draft: ToolDraft) -> Result<Tool> {
        let tool = self.catalog.add_tool(draft).clone();

        if self.config.catalog.persist_submissions {
            let mut stored = self.catalog.preferences().user_tools();
            stored.insert(0, tool.clone());
            self.catalog
                .preferences_mut()
                .set_user_tools(&stored)
                .context("Failed to persist submitted tool")?;
        }

        Ok(tool)
    }

    /// Debouncer for search input, primed with the active search text.
    pub fn search_debouncer(&self) -> Debouncer<String> {
        let current = self.catalog.filters().search.clone().unwrap_or_default();
        Debouncer::new(self.config.browse.search_debounce()).with_current(current)
    }
}
