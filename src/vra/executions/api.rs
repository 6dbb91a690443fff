//! Execution API operations

use serde::Serialize;

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::Execution;

/// Request body for running a pipeline
#[derive(Serialize, Debug)]
pub(crate) struct ExecutionRequest {
    pub input: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl VraClient {
    /// Get executions (documents-map response, OData filters)
    pub async fn get_executions(&self, query: &Query) -> Result<Vec<Execution>> {
        let path = format!("{}{}", api::EXECUTIONS, query.to_odata());
        self.get_documents(&path, "fetch executions").await
    }

    /// Get a single execution by ID
    pub async fn get_execution_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(Execution, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::EXECUTIONS, id),
            &format!("execution '{}'", id),
        )
        .await
    }

    /// Run a pipeline; returns the created execution
    pub async fn create_execution(
        &self,
        pipeline_id: &str,
        input: serde_json::Value,
        comments: Option<String>,
    ) -> Result<serde_json::Value> {
        let body = ExecutionRequest { input, comments };
        self.post_json(
            &format!("{}/{}/executions", api::PIPELINES, pipeline_id),
            &body,
            &format!("run pipeline '{}'", pipeline_id),
        )
        .await
    }

    /// Delete an execution by ID
    pub async fn delete_execution(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::EXECUTIONS, id),
            &format!("execution '{}'", id),
        )
        .await
    }
}
