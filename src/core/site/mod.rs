//! The site: a content tree plus the store its files resolve against.
//!
//! A `Site` owns both halves of what the search core borrows and is
//! the only place id uniqueness is checked. It can be built in memory,
//! from a manifest file, or by walking a content directory.
//!
//! # Manifest layout (TOML)
//!
//! ```toml
//! [[nodes]]
//! id = "about"
//! name = "about.md"
//! kind = "file"
//! content_ref = "about"
//!
//! [[nodes]]
//! id = "projects"
//! name = "projects"
//! kind = "folder"
//!
//!   [[nodes.children]]
//!   id = "folio"
//!   name = "folio.md"
//!   kind = "file"
//!   content_ref = "content/folio.md"
//!
//! [content]
//! about = "Khaled builds React apps."
//! ```

mod manifest;
mod walker;

pub use manifest::SiteManifest;
pub use walker::ContentWalker;

use std::collections::HashSet;

use crate::core::content::{ContentStore, StaticContentStore};
use crate::core::error::{FolioError, Result};
use crate::core::search::{SearchIndex, SearchOptions};
use crate::core::types::FileNode;

/// Content tree together with its content store
#[derive(Debug, Clone, Default)]
pub struct Site {
    nodes: Vec<FileNode>,
    content: StaticContentStore,
}

impl Site {
    /// Build a site, rejecting trees with duplicate node ids
    pub fn new(nodes: Vec<FileNode>, content: StaticContentStore) -> Result<Self> {
        validate_unique_ids(&nodes)?;
        Ok(Self { nodes, content })
    }

    /// Top-level nodes in display order
    pub fn nodes(&self) -> &[FileNode] {
        &self.nodes
    }

    pub fn content(&self) -> &StaticContentStore {
        &self.content
    }

    /// Search view over this site
    pub fn search_index(&self, options: SearchOptions) -> SearchIndex<'_, StaticContentStore> {
        SearchIndex::with_options(&self.nodes, &self.content, options)
    }

    /// Look up a node by id anywhere in the tree
    pub fn find(&self, id: &str) -> Option<&FileNode> {
        find_in(&self.nodes, id)
    }

    /// Resolved content of a file node
    pub fn open(&self, id: &str) -> Result<&str> {
        let node = self
            .find(id)
            .ok_or_else(|| FolioError::FileNotFound(id.to_string()))?;

        if !node.is_file() {
            return Err(FolioError::NotAFile(id.to_string()));
        }

        Ok(node
            .content_ref
            .as_deref()
            .map(|r| self.content.resolve(r))
            .unwrap_or(""))
    }

    /// Children of a folder, or the top level when `folder_id` is `None`
    pub fn children(&self, folder_id: Option<&str>) -> Result<&[FileNode]> {
        let Some(id) = folder_id else {
            return Ok(&self.nodes);
        };

        let node = self
            .find(id)
            .ok_or_else(|| FolioError::FileNotFound(id.to_string()))?;

        if node.is_folder() {
            Ok(&node.children)
        } else {
            Err(FolioError::InvalidPath(format!("{id} is not a folder")))
        }
    }

    /// Number of file nodes in the tree
    pub fn file_count(&self) -> usize {
        SearchIndex::new(&self.nodes, &self.content).flatten().len()
    }
}

fn find_in<'a>(nodes: &'a [FileNode], id: &str) -> Option<&'a FileNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Check that every id in the tree is unique
pub fn validate_unique_ids(nodes: &[FileNode]) -> Result<()> {
    fn walk<'a>(nodes: &'a [FileNode], seen: &mut HashSet<&'a str>) -> Result<()> {
        for node in nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(FolioError::DuplicateNodeId(node.id.clone()));
            }
            walk(&node.children, seen)?;
        }
        Ok(())
    }

    walk(nodes, &mut HashSet::new())
}
