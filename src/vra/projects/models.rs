//! Project data models

use serde::{Deserialize, Serialize};

use crate::vra::traits::VraResource;

/// Project from the IaaS service
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrators: Option<Vec<UserRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<UserRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_naming_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_resources: Option<bool>,
}

/// User reference used in project membership lists
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserRef {
    pub email: String,
}

impl VraResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Project {
    /// Administrator emails as a comma-separated list
    pub fn administrator_emails(&self) -> String {
        join_emails(self.administrators.as_deref())
    }

    pub fn member_count(&self) -> usize {
        self.members.as_deref().map(<[UserRef]>::len).unwrap_or(0)
    }
}

fn join_emails(users: Option<&[UserRef]>) -> String {
    users
        .unwrap_or_default()
        .iter()
        .map(|u| u.email.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
