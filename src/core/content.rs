//! Content store: maps opaque content references to full text.
//!
//! Resolution is total. Unknown references resolve to the empty
//! string so that a missing page can never fail a search.

use std::collections::{BTreeMap, HashMap};

/// Lookup from content reference to full text
pub trait ContentStore {
    /// Resolve a reference to its text, or "" if unknown
    fn resolve<'s>(&'s self, content_ref: &str) -> &'s str;
}

impl ContentStore for HashMap<String, String> {
    fn resolve<'s>(&'s self, content_ref: &str) -> &'s str {
        self.get(content_ref).map(String::as_str).unwrap_or("")
    }
}

impl ContentStore for BTreeMap<String, String> {
    fn resolve<'s>(&'s self, content_ref: &str) -> &'s str {
        self.get(content_ref).map(String::as_str).unwrap_or("")
    }
}

/// In-memory content table
///
/// Ordered by reference so listings and JSON dumps are stable.
#[derive(Debug, Clone, Default)]
pub struct StaticContentStore {
    entries: BTreeMap<String, String>,
}

impl StaticContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text for a reference
    pub fn insert(&mut self, content_ref: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(content_ref.into(), text.into());
    }

    pub fn contains(&self, content_ref: &str) -> bool {
        self.entries.contains_key(content_ref)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (reference, text) pairs in reference order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ContentStore for StaticContentStore {
    fn resolve<'s>(&'s self, content_ref: &str) -> &'s str {
        self.entries.resolve(content_ref)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticContentStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
