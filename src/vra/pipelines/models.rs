//! Pipeline data models

use serde::{Deserialize, Serialize};

use crate::vra::traits::VraResource;

/// Pipeline from the pipeline service.
///
/// Stage definitions stay as raw JSON: their shape depends entirely on the
/// task types used inside them.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub id: String,
    pub name: String,
    /// Project name (the pipeline service keys projects by name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// ENABLED, DISABLED or RELEASED
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_order: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<serde_json::Value>,
}

impl VraResource for Pipeline {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Pipeline {
    /// Stage names in execution order, comma-separated
    pub fn stage_summary(&self) -> String {
        self.stage_order.as_deref().unwrap_or_default().join(", ")
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_deserialization() {
        let json = r#"{
            "id": "pl-1",
            "name": "build-and-deploy",
            "project": "demo",
            "enabled": true,
            "state": "ENABLED",
            "stageOrder": ["Build", "Test", "Deploy"],
            "stages": { "Build": { "taskOrder": ["compile"] } }
        }"#;

        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert_eq!(pipeline.id(), "pl-1");
        assert_eq!(pipeline.project.as_deref(), Some("demo"));
        assert!(pipeline.is_enabled());
        assert_eq!(pipeline.stage_summary(), "Build, Test, Deploy");
        assert!(pipeline.stages.is_some());
    }

    #[test]
    fn test_pipeline_minimal() {
        let pipeline: Pipeline =
            serde_json::from_str(r#"{ "id": "pl-1", "name": "bare" }"#).unwrap();
        assert!(!pipeline.is_enabled());
        assert_eq!(pipeline.stage_summary(), "");
    }
}
