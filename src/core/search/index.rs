//! Linear-scan search over a static content tree.
//!
//! No index is precomputed. Every query flattens the tree, resolves
//! each file's content and counts matches, which is plenty for a
//! corpus of a handful of pages.

use crate::core::content::ContentStore;
use crate::core::search::matcher::{Matcher, QueryMode};
use crate::core::search::snippet::extract_snippets;
use crate::core::types::{FileNode, SearchResult};

/// Default characters of context on each side of a snippet match
pub const DEFAULT_CONTEXT_CHARS: usize = 50;

/// Default number of snippets kept per file
pub const DEFAULT_MAX_SNIPPETS: usize = 3;

/// Tuning for snippet extraction and query interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub context_chars: usize,
    pub max_snippets: usize,
    pub mode: QueryMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            context_chars: DEFAULT_CONTEXT_CHARS,
            max_snippets: DEFAULT_MAX_SNIPPETS,
            mode: QueryMode::Literal,
        }
    }
}

/// Search view over a borrowed tree and content store
///
/// Holds no state beyond its borrows; rebuild it if the tree changes.
pub struct SearchIndex<'a, S: ContentStore + ?Sized> {
    tree: &'a [FileNode],
    store: &'a S,
    options: SearchOptions,
}

impl<'a, S: ContentStore + ?Sized> SearchIndex<'a, S> {
    /// Create an index with default options
    pub fn new(tree: &'a [FileNode], store: &'a S) -> Self {
        Self::with_options(tree, store, SearchOptions::default())
    }

    pub fn with_options(tree: &'a [FileNode], store: &'a S, options: SearchOptions) -> Self {
        Self {
            tree,
            store,
            options,
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// All file nodes in depth-first pre-order; folders are skipped
    pub fn flatten(&self) -> Vec<&'a FileNode> {
        let mut files = Vec::new();
        collect_files(self.tree, &mut files);
        files
    }

    /// Run a query.
    ///
    /// Never fails: a blank query, an empty tree or a pattern that does
    /// not compile all produce an empty result. Results are ordered by
    /// match count, highest first, with ties kept in tree order.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let Some(matcher) = Matcher::new(query, self.options.mode) else {
            return Vec::new();
        };

        let files = self.flatten();
        let mut results: Vec<SearchResult> = files
            .iter()
            .filter_map(|node| self.match_file(node, &matcher))
            .collect();

        // Vec::sort_by is stable, which keeps tree order among ties
        results.sort_by(|a, b| b.match_count.cmp(&a.match_count));

        tracing::debug!(
            "Search {:?}: {} of {} files matched",
            query,
            results.len(),
            files.len()
        );

        results
    }

    fn match_file(&self, node: &FileNode, matcher: &Matcher) -> Option<SearchResult> {
        let content = node
            .content_ref
            .as_deref()
            .map(|r| self.store.resolve(r))
            .unwrap_or("");

        let match_count = matcher.count(content);
        if match_count == 0 {
            return None;
        }

        Some(SearchResult {
            file_id: node.id.clone(),
            file_name: node.name.clone(),
            full_content: content.to_string(),
            match_count,
            snippets: extract_snippets(
                content,
                matcher,
                self.options.context_chars,
                self.options.max_snippets,
            ),
        })
    }
}

fn collect_files<'a>(nodes: &'a [FileNode], out: &mut Vec<&'a FileNode>) {
    for node in nodes {
        if node.is_file() {
            out.push(node);
        } else {
            collect_files(&node.children, out);
        }
    }
}
