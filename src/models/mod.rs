//! Data models for catalog tools, categories, and query criteria.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of storage and presentation.

pub mod category;
pub mod filters;
pub mod tool;

// Re-export all model types
pub use category::Category;
pub use filters::{SearchFilters, SortBy};
pub use tool::{Tool, ToolDraft};
