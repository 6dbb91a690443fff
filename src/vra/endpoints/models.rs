//! Endpoint data models

use serde::{Deserialize, Serialize};

use crate::vra::traits::VraResource;

/// Pipeline endpoint (git, jenkins, docker registry, ...).
///
/// Properties are endpoint-type specific and stay as raw JSON.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Endpoint {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

impl VraResource for Endpoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Endpoint {
    pub fn type_name(&self) -> &str {
        self.endpoint_type.as_deref().unwrap_or("")
    }
}
