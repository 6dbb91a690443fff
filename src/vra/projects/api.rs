//! Project API operations

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::Project;

impl VraClient {
    /// Get projects (OData filter, all pages unless explicitly paged)
    pub async fn get_projects(&self, query: &Query) -> Result<Vec<Project>> {
        let path = format!("{}{}", api::PROJECTS, query.to_odata());
        if query.is_paged() {
            self.get_content_page(&path, "fetch projects").await
        } else {
            self.fetch_all_content_pages(&path, "fetch projects").await
        }
    }

    /// Get a single project by ID
    pub async fn get_project_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(Project, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::PROJECTS, id),
            &format!("project '{}'", id),
        )
        .await
    }

    /// Get a single project by name (server-side filter, then by ID)
    pub async fn get_project_by_name(
        &self,
        name: &str,
    ) -> Result<Option<(Project, serde_json::Value)>> {
        let query = Query::new().eq("name", name);
        let projects = self.get_projects(&query).await?;

        if let Some(project) = projects.into_iter().find(|p| p.matches(name)) {
            self.get_project_by_id(&project.id).await
        } else {
            Ok(None)
        }
    }

    /// Delete a project by ID
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::PROJECTS, id),
            &format!("project '{}'", id),
        )
        .await
    }
}
