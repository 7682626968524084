//! folio - search and terminal for a static portfolio site
//!
//! A portfolio presented as a code editor has a file explorer over a
//! small static content tree, a terminal, and a search panel. This
//! crate is the engine behind the last two: a case-insensitive
//! substring search that ranks files by match count and returns
//! highlighted line snippets, plus a simulated terminal that drives it.
//!
//! # Architecture
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - types, content store, search, site loaders
//!   - config, error, xdg, services
//!
//! - **terminal**: Simulated line-oriented terminal (depends on core)
//!
//! - **cli**: clap adapter (depends on core and terminal)
//!
//! # Example
//!
//! ```
//! use folio::{FileNode, SearchIndex, StaticContentStore};
//!
//! let tree = vec![FileNode::file("f1", "about.md", Some("c1"))];
//! let store: StaticContentStore =
//!     [("c1", "Khaled builds React apps.\nKhaled also designs UI.")]
//!         .into_iter()
//!         .collect();
//!
//! let results = SearchIndex::new(&tree, &store).search("khaled");
//! assert_eq!(results[0].match_count, 2);
//! assert_eq!(results[0].snippets[0], "Line 1: **Khaled** builds React apps.");
//! ```

// Core domain logic
pub mod core;

// Simulated terminal
pub mod terminal;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::content::{ContentStore, StaticContentStore};
pub use core::error::{FolioError, Result};
pub use core::search::{QueryMode, SearchIndex, SearchOptions};
pub use core::services::Services;
pub use core::site::Site;
pub use core::types::*;
