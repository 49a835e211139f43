//! DevShelf Library
//!
//! This library provides the core of the DevShelf developer tool catalog:
//! the tool models, the embedded seed catalog, the preference persistence
//! adapter, and the catalog store with its filtered, featured, trending, and
//! per-category views.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod models;
pub mod persistence;
pub mod services;
