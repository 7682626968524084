//! Unified service container for folio
//!
//! Provides shared access to the loaded site and configuration.

use crate::core::config::{Config, ContentConfig};
use crate::core::error::{FolioError, Result};
use crate::core::site::{ContentWalker, Site};
use crate::core::types::SearchResult;
use std::sync::Arc;

/// Unified services container
///
/// The CLI and the terminal use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Loaded content tree and store
    pub site: Arc<Site>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services, loading the site the configuration points at
    pub fn new(config: Config) -> Result<Self> {
        let site = load_site(&config.content)?;
        Ok(Self::with_site(config, site))
    }

    /// Create services around an already built site
    pub fn with_site(config: Config, site: Site) -> Self {
        Self {
            site: Arc::new(site),
            config: Arc::new(config),
        }
    }

    /// Search the site with the configured options
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.site
            .search_index(self.config.search.options())
            .search(query)
    }
}

/// Build a site from the manifest, else the content directory
pub fn load_site(content: &ContentConfig) -> Result<Site> {
    if let Some(manifest) = &content.manifest {
        return Site::from_manifest(manifest);
    }

    if let Some(root) = &content.root_dir {
        let walker = ContentWalker::new(
            &content.include_patterns,
            &content.exclude_patterns,
            content.max_file_size_kb,
        )?;
        return walker.build(root);
    }

    Err(FolioError::ConfigError(
        "No content source configured: set content.manifest or content.root_dir".to_string(),
    ))
}
