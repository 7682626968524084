//! Content directory walker with pattern-based filtering.
//!
//! Turns a directory of pages into a site: every directory becomes a
//! folder node and every accepted file a file node whose id and
//! content reference are its `/`-separated path under the root.
//! Unreadable entries are logged and skipped, never fatal.

use glob::Pattern;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::Site;
use crate::core::content::StaticContentStore;
use crate::core::error::{FolioError, Result};
use crate::core::types::FileNode;

/// Directory walker that builds a [`Site`]
pub struct ContentWalker {
    /// Patterns to include (e.g., "*.md", "*.txt")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/node_modules/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl ContentWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_kb` - Maximum file size in kilobytes
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_kb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile_patterns(include_patterns, "include")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_kb as u64) * 1024,
        })
    }

    /// Walk `root` and build a site from the accepted files
    pub fn build(&self, root: &Path) -> Result<Site> {
        if !root.is_dir() {
            return Err(FolioError::InvalidPath(format!(
                "Content directory not found: {}",
                root.display()
            )));
        }

        tracing::info!("Walking content directory {:?}", root);

        let mut content = StaticContentStore::new();
        let mut builder = TreeBuilder::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .sort_by(explorer_order)
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            let Some(rel) = relative_id(entry.path(), root) else {
                tracing::warn!("Skipping non UTF-8 path: {:?}", entry.path());
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                builder.open_folder(entry.depth(), rel, name);
                continue;
            }

            if !entry.file_type().is_file() || !self.accepts_file(&entry, &rel) {
                continue;
            }

            match fs::read_to_string(entry.path()) {
                Ok(text) => {
                    let node = FileNode::file(rel.clone(), name, Some(rel.as_str()));
                    content.insert(rel, text);
                    builder.add_file(entry.depth(), node);
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {:?}: {}", entry.path(), e);
                }
            }
        }

        let site = Site::new(builder.finish(), content)?;
        tracing::info!("Found {} file(s) in {:?}", site.file_count(), root);
        Ok(site)
    }

    /// Skip hidden and excluded directories early
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        // Never filter the root directory itself
        if !entry.file_type().is_dir() || entry.path() == root {
            return true;
        }

        if entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
        {
            return false;
        }

        match relative_id(entry.path(), root) {
            Some(rel) => {
                let as_dir = format!("{rel}/");
                !self
                    .exclude_patterns
                    .iter()
                    .any(|p| p.matches(&rel) || p.matches(&as_dir))
            }
            None => false,
        }
    }

    fn accepts_file(&self, entry: &DirEntry, rel: &str) -> bool {
        if let Ok(metadata) = entry.metadata() {
            if metadata.len() > self.max_file_size_bytes {
                tracing::debug!(
                    "Skipping large file: {:?} ({} bytes)",
                    entry.path(),
                    metadata.len()
                );
                return false;
            }
        }

        self.matches_patterns(rel)
    }

    /// Check a root-relative path against the include/exclude patterns
    fn matches_patterns(&self, rel: &str) -> bool {
        let file_name = rel.rsplit('/').next().unwrap_or(rel);

        // If no include patterns, include all
        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(rel) || p.matches(file_name));

        included && !self.exclude_patterns.iter().any(|p| p.matches(rel))
    }
}

fn compile_patterns(patterns: &[String], kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| FolioError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}

/// Folders before files, then by name
fn explorer_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    b_dir
        .cmp(&a_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// `/`-separated path of `path` under `root`
fn relative_id(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Assembles nested nodes from a pre-order walk
///
/// Open folders sit on a stack indexed by depth. Folders that end up
/// with no accepted files are dropped.
#[derive(Default)]
struct TreeBuilder {
    roots: Vec<FileNode>,
    open: Vec<FileNode>,
}

impl TreeBuilder {
    fn open_folder(&mut self, depth: usize, id: String, name: String) {
        self.close_to(depth);
        self.open.push(FileNode::folder(id, name, Vec::new()));
    }

    fn add_file(&mut self, depth: usize, node: FileNode) {
        self.close_to(depth);
        self.attach(node);
    }

    fn finish(mut self) -> Vec<FileNode> {
        self.close_to(1);
        self.roots
    }

    /// Close folders until the innermost open one is the parent of `depth`
    fn close_to(&mut self, depth: usize) {
        while self.open.len() >= depth {
            match self.open.pop() {
                Some(folder) if !folder.children.is_empty() => self.attach(folder),
                Some(_) => {}
                None => break,
            }
        }
    }

    fn attach(&mut self, node: FileNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}
