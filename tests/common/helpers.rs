// Test helper functions

use folio::{Config, FileNode, Services, Site, StaticContentStore};
use std::sync::Arc;

/// Services around an in-memory site with default config
#[allow(dead_code)] // Used in integration tests
pub fn services_for_site(site: Site) -> Arc<Services> {
    Arc::new(Services::with_site(Config::default(), site))
}

/// Services for a flat list of (id, content) files
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(files: &[(&str, &str)]) -> Arc<Services> {
    let nodes = files
        .iter()
        .map(|(id, _)| FileNode::file(*id, format!("{id}.md"), Some(*id)))
        .collect();
    let content: StaticContentStore = files.iter().copied().collect();
    services_for_site(Site::new(nodes, content).expect("Failed to build site"))
}

/// Ids of a result or node list, for order assertions
#[allow(dead_code)] // Used in integration tests
pub fn ids<'a, T, F>(items: &'a [T], id: F) -> Vec<&'a str>
where
    F: Fn(&'a T) -> &'a str,
{
    items.iter().map(id).collect()
}
