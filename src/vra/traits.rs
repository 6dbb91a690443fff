//! Common traits and response shapes for Aria Automation resources

use serde::Deserialize;
use std::collections::BTreeMap;

/// Common trait for all resources (catalog items, pipelines, projects, ...)
///
/// Provides a unified interface for resource identification and matching,
/// used by the get-by-name-or-id command paths.
pub trait VraResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// List response shape used by the catalog, blueprint and IaaS services:
/// items under `content` plus element counters.
#[derive(Deserialize, Debug)]
pub struct ContentPage<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default, rename = "totalElements")]
    pub total_elements: Option<u64>,
    #[serde(default, rename = "numberOfElements")]
    pub number_of_elements: Option<u64>,
}

/// List response shape used by the pipeline service: items keyed by ID
/// under `documents`. A BTreeMap keeps listing order deterministic.
#[derive(Deserialize, Debug)]
pub struct DocumentsPage<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default, rename = "totalCount")]
    pub total_count: Option<u64>,
    #[serde(default = "BTreeMap::new")]
    pub documents: BTreeMap<String, T>,
}

impl<T> DocumentsPage<T> {
    /// Consume the page and return the documents in key order
    pub fn into_items(self) -> Vec<T> {
        self.documents.into_values().collect()
    }
}
