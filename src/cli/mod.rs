//! CLI command handlers for DevShelf.
//!
//! This module provides headless, scriptable access to the catalog for
//! automation, testing, and CI/CD integration.

pub mod browse;
pub mod common;
pub mod config;
pub mod engage;
pub mod submit;

// Re-export types used by main.rs and tests
pub use browse::{CategoriesArgs, CategoryArgs, FeaturedArgs, ListArgs, ShowArgs, TrendingArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use engage::{LikeArgs, PrefsArgs, SaveArgs};
pub use submit::AddArgs;
