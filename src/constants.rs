//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, storage keys, and browsing defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "DevShelf";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "devshelf";

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "DevShelf";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "DEVSHELF_CONFIG_DIR";

/// Storage key for the liked tool ID set.
pub const LIKED_TOOLS_KEY: &str = "likedTools";

/// Storage key for the saved tool ID set.
pub const SAVED_TOOLS_KEY: &str = "savedTools";

/// Storage key for the dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Storage key for user-submitted tools.
pub const USER_TOOLS_KEY: &str = "userTools";

/// Tools shown per page on the browse listing.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of tools returned by the likes-only trending query.
pub const TRENDING_LIMIT: usize = 6;

/// Quiet period before a search input change is applied.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Number of tools previewed per category in the category overview.
pub const CATEGORY_PREVIEW_LEN: usize = 3;

/// Number of tags shown on a listing row before the rest are summarized.
pub const TAG_PREVIEW_LEN: usize = 3;

/// Author recorded for tools submitted without an explicit author.
pub const DEFAULT_SUBMISSION_AUTHOR: &str = "You";
