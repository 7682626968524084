//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod list;
pub mod open;
pub mod search;
pub mod terminal;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use list::ListArgs;
pub use open::OpenArgs;
pub use search::SearchArgs;
pub use terminal::TerminalArgs;
