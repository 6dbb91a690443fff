//! Orchestrator inventory wire format

use serde::Deserialize;

use crate::error::Result;
use crate::vra::VraClient;

/// List response: a total plus one link per inventory object
#[derive(Deserialize, Debug)]
pub struct InventoryPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default = "Vec::new")]
    pub link: Vec<InventoryLink>,
}

/// One inventory object, described by attribute name/value pairs
#[derive(Deserialize, Debug)]
pub struct InventoryLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default = "Vec::new")]
    pub attributes: Vec<InventoryAttribute>,
}

#[derive(Deserialize, Debug)]
pub struct InventoryAttribute {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl InventoryLink {
    /// Attribute value by name, stringified (the service mixes strings and
    /// numbers in attribute values)
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_ref())
            .map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}

impl VraClient {
    /// Fetch an orchestrator inventory listing
    pub(crate) async fn get_inventory(
        &self,
        path: &str,
        error_context: &str,
    ) -> Result<Vec<InventoryLink>> {
        let url = format!("{}{}", self.base_url(), path);
        log::debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let page: InventoryPage = self.parse_api_response(response, error_context).await?;
        Ok(page.link)
    }
}
