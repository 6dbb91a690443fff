//! Variable data models

use serde::{Deserialize, Serialize};

use crate::vra::traits::VraResource;

/// Pipeline variable
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// REGULAR, SECRET or RESTRICTED
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl VraResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Variable {
    pub fn type_name(&self) -> &str {
        self.variable_type.as_deref().unwrap_or("REGULAR")
    }

    /// Value for table display. Secrets and restricted values are masked;
    /// the service itself never returns secret plaintext anyway.
    pub fn display_value(&self) -> String {
        match self.type_name() {
            "SECRET" | "RESTRICTED" => "*****".to_string(),
            _ => self.value.clone().unwrap_or_default(),
        }
    }
}
