//! Service layer for business logic.
//!
//! This module contains the catalog store and the pure helpers it is built
//! from, plus the session wiring that connects it to configuration and storage.

pub mod catalog;
pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod session;

// Re-export commonly used types and functions
pub use catalog::{CatalogStore, CategorySummary};
pub use debounce::Debouncer;
pub use filter::apply_filters;
pub use pagination::{paginate, Page};
pub use session::{Session, SessionStore};
