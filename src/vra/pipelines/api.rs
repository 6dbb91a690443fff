//! Pipeline API operations

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::Pipeline;

impl VraClient {
    /// Get pipelines (documents-map response, OData filters)
    pub async fn get_pipelines(&self, query: &Query) -> Result<Vec<Pipeline>> {
        let path = format!("{}{}", api::PIPELINES, query.to_odata());
        self.get_documents(&path, "fetch pipelines").await
    }

    /// Get a single pipeline by ID
    pub async fn get_pipeline_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(Pipeline, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::PIPELINES, id),
            &format!("pipeline '{}'", id),
        )
        .await
    }

    /// Get a single pipeline by name, optionally scoped to a project
    pub async fn get_pipeline_by_name(
        &self,
        name: &str,
        project: Option<&str>,
    ) -> Result<Option<(Pipeline, serde_json::Value)>> {
        let query = Query::new().eq("name", name).eq_opt("project", project);
        let pipelines = self.get_pipelines(&query).await?;

        if let Some(pipeline) = pipelines.into_iter().find(|p| p.matches(name)) {
            self.get_pipeline_by_id(&pipeline.id).await
        } else {
            Ok(None)
        }
    }

    /// Import a pipeline from its YAML definition
    pub async fn import_pipeline(&self, yaml: String) -> Result<serde_json::Value> {
        self.post_yaml(api::PIPELINE_IMPORT, yaml, "import pipeline")
            .await
    }

    /// Replace a pipeline definition
    pub async fn update_pipeline(
        &self,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.put_json(
            &format!("{}/{}", api::PIPELINES, id),
            body,
            &format!("update pipeline '{}'", id),
        )
        .await
    }

    /// Delete a pipeline by ID
    pub async fn delete_pipeline(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::PIPELINES, id),
            &format!("pipeline '{}'", id),
        )
        .await
    }
}
