//! Execution data models

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Pipeline execution from the pipeline service
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: String,
    /// Name of the pipeline this execution ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Monotonic run number per pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Execution {
    /// "pipeline #index" display form, falling back to the ID
    pub fn display_name(&self) -> String {
        match (&self.name, self.index) {
            (Some(name), Some(index)) => format!("{} #{}", name, index),
            (Some(name), None) => name.clone(),
            _ => self.id.clone(),
        }
    }

    /// Updated-at rendered as UTC, empty when absent or out of range
    pub fn updated_at_utc(&self) -> String {
        self.updated_at
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_deserialization() {
        let json = r#"{
            "id": "ex-1",
            "name": "build-and-deploy",
            "project": "demo",
            "index": 42,
            "status": "COMPLETED",
            "statusMessage": "Execution Completed",
            "executedBy": "admin",
            "input": { "branch": "main" },
            "updatedAt": 1709294400000
        }"#;

        let execution: Execution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.display_name(), "build-and-deploy #42");
        assert_eq!(execution.status.as_deref(), Some("COMPLETED"));
        assert_eq!(execution.updated_at_utc(), "2024-03-01 12:00:00 UTC");
    }

    #[test]
    fn test_execution_display_name_fallbacks() {
        let execution: Execution = serde_json::from_str(r#"{ "id": "ex-1" }"#).unwrap();
        assert_eq!(execution.display_name(), "ex-1");

        let execution: Execution =
            serde_json::from_str(r#"{ "id": "ex-1", "name": "build" }"#).unwrap();
        assert_eq!(execution.display_name(), "build");
    }

    #[test]
    fn test_execution_updated_at_missing() {
        let execution: Execution = serde_json::from_str(r#"{ "id": "ex-1" }"#).unwrap();
        assert_eq!(execution.updated_at_utc(), "");
    }
}
