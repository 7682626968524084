//! Substring search with ranked results and highlighted snippets.

mod index;
mod matcher;
mod snippet;

pub use index::{SearchIndex, SearchOptions, DEFAULT_CONTEXT_CHARS, DEFAULT_MAX_SNIPPETS};
pub use matcher::{Matcher, QueryMode};
pub use snippet::{extract_snippets, extract_snippets_with, line_snippet};
