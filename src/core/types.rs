//! Core data types for folio.
//!
//! Defines the navigable content tree nodes and the per-file
//! search result handed to the UI shell.

use serde::{Deserialize, Serialize};

/// Kind of a node in the content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A node in the static navigable content tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Identifier, unique across the whole tree
    pub id: String,

    /// Display name (e.g. "about.md")
    pub name: String,

    pub kind: NodeKind,

    /// Key into the content store (files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,

    /// Ordered children (folders only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Create a file node
    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        content_ref: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File,
            content_ref: content_ref.map(str::to_string),
            children: Vec::new(),
        }
    }

    /// Create a folder node
    pub fn folder(id: impl Into<String>, name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder,
            content_ref: None,
            children,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Per-file outcome of a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Id of the matching file node
    pub file_id: String,

    /// Display name captured at search time
    pub file_name: String,

    /// Complete resolved content of the file
    pub full_content: String,

    /// Case-insensitive occurrences of the query in `full_content`
    pub match_count: usize,

    /// Up to `max_snippets` highlighted lines, in line order
    pub snippets: Vec<String>,
}
