//! Site manifest loading (TOML or JSON).
//!
//! Content references that are not given inline in the `[content]`
//! table are read from files relative to the manifest's directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path};

use super::Site;
use crate::core::content::StaticContentStore;
use crate::core::error::{FolioError, Result};
use crate::core::types::FileNode;

/// On-disk description of a site
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteManifest {
    #[serde(default)]
    pub nodes: Vec<FileNode>,

    /// Inline content keyed by content reference
    #[serde(default)]
    pub content: BTreeMap<String, String>,
}

impl SiteManifest {
    /// Parse a manifest, picking the format from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            FolioError::InvalidManifest(format!("Failed to read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_toml(&contents)
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Turn the manifest into a site.
    ///
    /// `base_dir` is where file-backed content references are looked up.
    /// References that are neither inline nor a readable file are left
    /// unresolved and behave as empty content.
    pub fn into_site(self, base_dir: Option<&Path>) -> Result<Site> {
        let mut content: StaticContentStore = self.content.into_iter().collect();

        if let Some(base) = base_dir {
            let mut refs = Vec::new();
            collect_refs(&self.nodes, &mut refs);

            for content_ref in refs {
                if content.contains(content_ref) {
                    continue;
                }
                if let Some(text) = read_ref(base, content_ref) {
                    content.insert(content_ref, text);
                }
            }
        }

        let site = Site::new(self.nodes, content)?;
        tracing::info!(
            "Loaded manifest site: {} file(s), {} content entr(ies)",
            site.file_count(),
            site.content().len()
        );
        Ok(site)
    }
}

impl Site {
    /// Load a site from a manifest file
    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let manifest = SiteManifest::from_file(path)?;
        manifest.into_site(path.parent())
    }
}

fn collect_refs<'a>(nodes: &'a [FileNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        if let Some(r) = node.content_ref.as_deref() {
            out.push(r);
        }
        collect_refs(&node.children, out);
    }
}

/// Read a file-backed reference, refusing paths that leave `base`
fn read_ref(base: &Path, content_ref: &str) -> Option<String> {
    let rel = Path::new(content_ref);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        tracing::warn!("Ignoring content reference outside the site: {}", content_ref);
        return None;
    }

    let full = base.join(rel);
    if !full.is_file() {
        return None;
    }

    match fs::read_to_string(&full) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("Failed to read content {:?}: {}", full, e);
            None
        }
    }
}
