//! Catalog item data models

use serde::{Deserialize, Serialize};

use crate::vra::traits::VraResource;

/// Catalog item from the catalog service
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<CatalogItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Catalog item type reference (blueprint, workflow, ABX, ...)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CatalogItemType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VraResource for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogItem {
    /// Human-readable type name, empty when the service omits it
    pub fn type_name(&self) -> &str {
        self.item_type
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .unwrap_or("")
    }
}
