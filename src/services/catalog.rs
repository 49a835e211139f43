//! Catalog store: the tool collection, the active query, and user preferences.
//!
//! The store is constructed explicitly and handed by reference to whatever
//! needs it. It owns the tool collection, keeps the filtered view in sync
//! with the collection and the criteria, and writes like/save changes through
//! to the persistence adapter.
//!
//! None of the operations fail: an unknown tool ID is a no-op, and a failed
//! preference write is logged while the in-memory state still changes.

use crate::constants::{CATEGORY_PREVIEW_LEN, DEFAULT_PAGE_SIZE, TRENDING_LIMIT};
use crate::models::{Category, SearchFilters, SortBy, Tool, ToolDraft};
use crate::persistence::{KeyValueStore, Preferences};
use crate::services::filter::{apply_filters, sort_tools};
use crate::services::pagination::{paginate, Page};
use chrono::Local;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Tool count and leading entries for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Category
    pub category: Category,
    /// Number of tools in the category
    pub count: usize,
    /// First tools of the category in collection order
    pub preview: Vec<Tool>,
}

/// In-memory catalog with derived views and persisted preferences.
#[derive(Debug)]
pub struct CatalogStore<S> {
    tools: Vec<Tool>,
    filters: SearchFilters,
    filtered: Vec<Tool>,
    liked: Vec<String>,
    saved: Vec<String>,
    current_page: usize,
    page_size: usize,
    trending_limit: usize,
    preferences: Preferences<S>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Creates a store from a seed collection, hydrating liked and saved IDs
    /// from `preferences`.
    pub fn new(seed: Vec<Tool>, preferences: Preferences<S>) -> Self {
        let liked = preferences.liked_tools();
        let saved = preferences.saved_tools();
        debug!(
            "Hydrated catalog with {} tools, {} liked, {} saved",
            seed.len(),
            liked.len(),
            saved.len()
        );

        let mut store = Self {
            tools: seed,
            filters: SearchFilters::default(),
            filtered: Vec::new(),
            liked,
            saved,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            trending_limit: TRENDING_LIMIT,
            preferences,
        };
        store.refresh_filtered();
        store
    }

    /// Overrides the listing page size (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Overrides how many tools the likes-only trending query returns.
    pub fn with_trending_limit(mut self, limit: usize) -> Self {
        self.trending_limit = limit;
        self
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Full collection in insertion order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Tools matching the active criteria.
    pub fn filtered_tools(&self) -> &[Tool] {
        &self.filtered
    }

    /// Tools flagged for the featured carousel, in collection order.
    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.is_featured()).collect()
    }

    /// Active criteria.
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Liked tool IDs.
    pub fn liked_tools(&self) -> &[String] {
        &self.liked
    }

    /// Saved tool IDs.
    pub fn saved_tools(&self) -> &[String] {
        &self.saved
    }

    /// Returns true if `id` is liked.
    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.iter().any(|l| l == id)
    }

    /// Returns true if `id` is saved.
    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|s| s == id)
    }

    /// Looks up a tool by ID.
    pub fn find(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Borrows the persistence adapter.
    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    /// Mutably borrows the persistence adapter.
    pub fn preferences_mut(&mut self) -> &mut Preferences<S> {
        &mut self.preferences
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replaces the active criteria and recomputes the filtered view.
    ///
    /// Pagination returns to the first page.
    pub fn set_filters(&mut self, filters: SearchFilters) {
        debug!("Applying filters: {:?}", filters);
        self.filters = filters;
        self.current_page = 1;
        self.refresh_filtered();
    }

    /// Flips the like state of `id` and adjusts its like counter.
    ///
    /// Returns the new like state, or `None` if no tool has that ID. The
    /// counter never drops below zero.
    pub fn toggle_like(&mut self, id: &str) -> Option<bool> {
        let Some(tool) = self.tools.iter_mut().find(|t| t.id == id) else {
            debug!("toggle_like: no tool with id '{}'", id);
            return None;
        };

        let liked = if let Some(pos) = self.liked.iter().position(|l| l == id) {
            self.liked.remove(pos);
            tool.likes = tool.likes.saturating_sub(1);
            false
        } else {
            self.liked.push(id.to_string());
            tool.likes = tool.likes.saturating_add(1);
            true
        };
        info!("Tool '{}' {} ({} likes)", id, if liked { "liked" } else { "unliked" }, tool.likes);

        if let Err(e) = self.preferences.set_liked_tools(&self.liked) {
            warn!("Could not persist liked tools: {:#}", e);
        }
        self.refresh_filtered();
        Some(liked)
    }

    /// Flips the saved state of `id`.
    ///
    /// Returns the new saved state, or `None` if no tool has that ID.
    pub fn toggle_save(&mut self, id: &str) -> Option<bool> {
        if self.find(id).is_none() {
            debug!("toggle_save: no tool with id '{}'", id);
            return None;
        }

        let saved = if let Some(pos) = self.saved.iter().position(|s| s == id) {
            self.saved.remove(pos);
            false
        } else {
            self.saved.push(id.to_string());
            true
        };
        info!("Tool '{}' {}", id, if saved { "saved" } else { "unsaved" });

        if let Err(e) = self.preferences.set_saved_tools(&self.saved) {
            warn!("Could not persist saved tools: {:#}", e);
        }
        Some(saved)
    }

    /// Adds a submitted tool to the front of the collection.
    ///
    /// The tool gets a fresh UUID, zeroed counters, and today's date. The
    /// tool is kept for this session only; nothing is written to storage.
    pub fn add_tool(&mut self, draft: ToolDraft) -> &Tool {
        let id = Uuid::new_v4().to_string();
        let tool = Tool::from_draft(draft, id, Local::now().date_naive());
        info!("Added tool '{}' ({})", tool.name, tool.id);

        self.tools.insert(0, tool);
        self.refresh_filtered();
        &self.tools[0]
    }

    /// Prepends previously stored tools, skipping IDs already present.
    pub fn prepend_tools(&mut self, tools: Vec<Tool>) {
        let fresh: Vec<Tool> = tools
            .into_iter()
            .filter(|t| self.find(&t.id).is_none())
            .collect();
        if fresh.is_empty() {
            return;
        }
        debug!("Prepending {} stored tools", fresh.len());
        self.tools.splice(0..0, fresh);
        self.refresh_filtered();
    }

    /// Selects the listing page (1-based, clamped on read).
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current page of the filtered view.
    pub fn current_page(&self) -> Page<Tool> {
        paginate(&self.filtered, self.current_page, self.page_size)
    }

    /// Tools in `category`, taken from the full collection in collection order.
    pub fn tools_by_category(&self, category: Category) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.category == category).collect()
    }

    /// Every category with its count and a short preview.
    pub fn category_overview(&self) -> Vec<CategorySummary> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let tools = self.tools_by_category(category);
                CategorySummary {
                    category,
                    count: tools.len(),
                    preview: tools
                        .into_iter()
                        .take(CATEGORY_PREVIEW_LEN)
                        .cloned()
                        .collect(),
                }
            })
            .collect()
    }

    /// Most liked tools, truncated to the trending limit (6 by default).
    pub fn trending_tools(&self) -> Vec<Tool> {
        let mut ranked = self.tools.clone();
        sort_tools(&mut ranked, SortBy::Likes);
        ranked.truncate(self.trending_limit);
        ranked
    }

    /// Whole collection ranked by `likes * 2 + views`, without truncation.
    pub fn trending_by_score(&self) -> Vec<Tool> {
        let mut ranked = self.tools.clone();
        ranked.sort_by_key(|t| Reverse(t.trending_score()));
        ranked
    }

    fn refresh_filtered(&mut self) {
        self.filtered = apply_filters(&self.tools, &self.filters);
        debug!("Filtered view holds {} tools", self.filtered.len());
    }
}
