//! Cloud account data models

use serde::{Deserialize, Serialize};

use crate::vra::traits::VraResource;

/// Cloud account from the IaaS service
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccount {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider type, e.g. vsphere, aws, azure, gcp, nsxt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_region_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl VraResource for CloudAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CloudAccount {
    pub fn type_name(&self) -> &str {
        self.cloud_account_type.as_deref().unwrap_or("")
    }

    /// Enabled regions as a comma-separated list
    pub fn regions(&self) -> String {
        self.enabled_region_ids
            .as_deref()
            .unwrap_or_default()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_account_deserialization() {
        let json = r#"{
            "id": "ca-1",
            "name": "vc-datacenter",
            "cloudAccountType": "vsphere",
            "orgId": "org-7",
            "enabledRegionIds": ["Datacenter:dc-1", "Datacenter:dc-2"],
            "createdAt": "2024-01-15T08:30:00.000Z"
        }"#;

        let account: CloudAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.id(), "ca-1");
        assert_eq!(account.type_name(), "vsphere");
        assert_eq!(account.regions(), "Datacenter:dc-1, Datacenter:dc-2");
    }

    #[test]
    fn test_cloud_account_minimal() {
        let account: CloudAccount =
            serde_json::from_str(r#"{ "id": "ca-1", "name": "aws-east" }"#).unwrap();
        assert_eq!(account.type_name(), "");
        assert_eq!(account.regions(), "");
    }
}
