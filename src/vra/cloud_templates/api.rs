//! Cloud template API operations

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::CloudTemplate;

impl VraClient {
    /// Get cloud templates (server-side search, content-page shape)
    pub async fn get_cloud_templates(&self, query: &Query) -> Result<Vec<CloudTemplate>> {
        let path = format!("{}{}", api::CLOUD_TEMPLATES, query.to_page_params());
        self.get_content_page(&path, "fetch cloud templates").await
    }

    /// Get a single cloud template by ID
    pub async fn get_cloud_template_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(CloudTemplate, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::CLOUD_TEMPLATES, id),
            &format!("cloud template '{}'", id),
        )
        .await
    }

    /// Get a single cloud template by name via server-side search
    pub async fn get_cloud_template_by_name(
        &self,
        name: &str,
    ) -> Result<Option<(CloudTemplate, serde_json::Value)>> {
        let query = Query::new().search(name);
        let templates = self.get_cloud_templates(&query).await?;

        if let Some(template) = templates.into_iter().find(|t| t.matches(name)) {
            self.get_cloud_template_by_id(&template.id).await
        } else {
            Ok(None)
        }
    }

    /// Delete a cloud template by ID
    pub async fn delete_cloud_template(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::CLOUD_TEMPLATES, id),
            &format!("cloud template '{}'", id),
        )
        .await
    }
}
