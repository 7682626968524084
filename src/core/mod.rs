//! Core domain logic (adapter-agnostic)
//!
//! This module contains everything that does not depend on how the
//! search is presented (CLI, terminal, or an embedding UI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Content tree nodes and search results
//! - **content**: Content store trait and in-memory store
//! - **search**: Substring search, ranking and snippets
//! - **site**: Tree + store, manifest and directory loaders
//! - **services**: Unified service container
//! - **xdg**: Config file location

pub mod config;
pub mod content;
pub mod error;
pub mod search;
pub mod services;
pub mod site;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{FolioError, Result};
pub use services::Services;
