//! Endpoint API operations

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::Endpoint;

impl VraClient {
    /// Get endpoints (documents-map response, OData filters)
    pub async fn get_endpoints(&self, query: &Query) -> Result<Vec<Endpoint>> {
        let path = format!("{}{}", api::ENDPOINTS, query.to_odata());
        self.get_documents(&path, "fetch endpoints").await
    }

    /// Get a single endpoint by ID
    pub async fn get_endpoint_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(Endpoint, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::ENDPOINTS, id),
            &format!("endpoint '{}'", id),
        )
        .await
    }

    /// Get a single endpoint by name, optionally scoped to a project
    pub async fn get_endpoint_by_name(
        &self,
        name: &str,
        project: Option<&str>,
    ) -> Result<Option<(Endpoint, serde_json::Value)>> {
        let query = Query::new().eq("name", name).eq_opt("project", project);
        let endpoints = self.get_endpoints(&query).await?;

        if let Some(endpoint) = endpoints.into_iter().find(|e| e.matches(name)) {
            self.get_endpoint_by_id(&endpoint.id).await
        } else {
            Ok(None)
        }
    }

    /// Delete an endpoint by ID
    pub async fn delete_endpoint(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::ENDPOINTS, id),
            &format!("endpoint '{}'", id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "project": "demo",
            "type": "git"
        })
    }

    #[tokio::test]
    async fn test_get_endpoints() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/pipeline/api/endpoints"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "documents": {
                    "ep-1": endpoint_json("ep-1", "corp-gitlab"),
                    "ep-2": endpoint_json("ep-2", "jenkins-main")
                }
            })))
            .mount(&mock_server)
            .await;

        let endpoints = client.get_endpoints(&Query::new()).await.unwrap();
        assert_eq!(endpoints.len(), 2);
    }

    #[tokio::test]
    async fn test_get_endpoint_by_id_not_found() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/pipeline/api/endpoints/ep-missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client.get_endpoint_by_id("ep-missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_endpoint() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/pipeline/api/endpoints/ep-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.delete_endpoint("ep-1").await.unwrap();
    }
}
