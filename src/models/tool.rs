//! Tool listing and submission draft.

use crate::models::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// # Invariants
///
/// - `id` is unique across the in-memory collection
/// - `likes` and `views` are unsigned and therefore never negative
/// - `tags` order is significant (previews show the first three)
///
/// JSON field names are camelCase so persisted user tools keep the
/// `imageUrl`/`createdAt` shape used by the storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Catalog category
    pub category: Category,
    /// Cover image URL
    pub image_url: String,
    /// Source repository URL
    pub github_url: String,
    /// Optional live demo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    /// Free-text tags in display order
    pub tags: Vec<String>,
    /// Like counter
    pub likes: u64,
    /// View counter
    pub views: u64,
    /// Display author
    pub author: String,
    /// Calendar date the tool was listed (serialized `YYYY-MM-DD`)
    pub created_at: NaiveDate,
    /// Optional screenshot URLs in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    /// Included in the featured carousel when true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Tool {
    /// Builds a fresh tool from a draft with zeroed counters.
    pub fn from_draft(draft: ToolDraft, id: String, created_at: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            image_url: draft.image_url,
            github_url: draft.github_url,
            demo_url: draft.demo_url,
            tags: draft.tags,
            likes: 0,
            views: 0,
            author: draft.author,
            created_at,
            screenshots: draft.screenshots,
            featured: draft.featured,
        }
    }

    /// Returns true if the tool is flagged for the featured carousel.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Composite popularity score used by the score-ranked trending query.
    pub fn trending_score(&self) -> u64 {
        self.likes.saturating_mul(2).saturating_add(self.views)
    }

    /// Returns true if `needle` (already lowercased) occurs in the name,
    /// description, or any tag, ignoring case.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// First `n` tags, for truncated display.
    pub fn preview_tags(&self, n: usize) -> &[String] {
        &self.tags[..self.tags.len().min(n)]
    }
}

/// Everything needed to submit a tool; the store fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDraft {
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Catalog category
    pub category: Category,
    /// Cover image URL
    pub image_url: String,
    /// Source repository URL
    pub github_url: String,
    /// Optional live demo URL
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Free-text tags in display order
    pub tags: Vec<String>,
    /// Display author
    pub author: String,
    /// Optional screenshot URLs
    #[serde(default)]
    pub screenshots: Option<Vec<String>>,
    /// Featured flag
    #[serde(default)]
    pub featured: Option<bool>,
}
