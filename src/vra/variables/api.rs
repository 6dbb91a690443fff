//! Variable API operations

use serde::Serialize;

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::Variable;

/// Request body for creating or replacing a variable
#[derive(Serialize, Debug)]
pub(crate) struct VariableRequest<'a> {
    pub name: &'a str,
    pub project: &'a str,
    #[serde(rename = "type")]
    pub variable_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub value: &'a str,
}

impl VraClient {
    /// Get variables (documents-map response, OData filters)
    pub async fn get_variables(&self, query: &Query) -> Result<Vec<Variable>> {
        let path = format!("{}{}", api::VARIABLES, query.to_odata());
        self.get_documents(&path, "fetch variables").await
    }

    /// Get a single variable by ID
    pub async fn get_variable_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(Variable, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::VARIABLES, id),
            &format!("variable '{}'", id),
        )
        .await
    }

    /// Get a single variable by name, optionally scoped to a project
    pub async fn get_variable_by_name(
        &self,
        name: &str,
        project: Option<&str>,
    ) -> Result<Option<(Variable, serde_json::Value)>> {
        let query = Query::new().eq("name", name).eq_opt("project", project);
        let variables = self.get_variables(&query).await?;

        if let Some(variable) = variables.into_iter().find(|v| v.matches(name)) {
            self.get_variable_by_id(&variable.id).await
        } else {
            Ok(None)
        }
    }

    /// Create a variable
    pub async fn create_variable(&self, request: &VariableRequest<'_>) -> Result<Variable> {
        self.post_json(
            api::VARIABLES,
            request,
            &format!("create variable '{}'", request.name),
        )
        .await
    }

    /// Replace a variable definition
    pub async fn update_variable(
        &self,
        id: &str,
        request: &VariableRequest<'_>,
    ) -> Result<Variable> {
        self.put_json(
            &format!("{}/{}", api::VARIABLES, id),
            request,
            &format!("update variable '{}'", request.name),
        )
        .await
    }

    /// Delete a variable by ID
    pub async fn delete_variable(&self, id: &str) -> Result<()> {
        self.delete_resource(
            &format!("{}/{}", api::VARIABLES, id),
            &format!("variable '{}'", id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn variable_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "project": "demo",
            "type": "REGULAR",
            "value": "42"
        })
    }

    #[tokio::test]
    async fn test_get_variables() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/pipeline/api/variables"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "documents": { "var-1": variable_json("var-1", "buildNumber") }
            })))
            .mount(&mock_server)
            .await;

        let variables = client.get_variables(&Query::new()).await.unwrap();
        assert_eq!(variables.len(), 1);
        assert_eq!(variables[0].name, "buildNumber");
    }

    #[tokio::test]
    async fn test_create_variable_sends_typed_body() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/pipeline/api/variables"))
            .and(body_json(serde_json::json!({
                "name": "buildNumber",
                "project": "demo",
                "type": "REGULAR",
                "value": "42"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(variable_json("var-1", "buildNumber")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = VariableRequest {
            name: "buildNumber",
            project: "demo",
            variable_type: "REGULAR",
            description: None,
            value: "42",
        };
        let variable = client.create_variable(&request).await.unwrap();
        assert_eq!(variable.id, "var-1");
    }

    #[tokio::test]
    async fn test_update_variable() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/pipeline/api/variables/var-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(variable_json("var-1", "buildNumber")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = VariableRequest {
            name: "buildNumber",
            project: "demo",
            variable_type: "REGULAR",
            description: Some("bumped"),
            value: "43",
        };
        let variable = client.update_variable("var-1", &request).await.unwrap();
        assert_eq!(variable.name, "buildNumber");
    }

    #[tokio::test]
    async fn test_delete_variable() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/pipeline/api/variables/var-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.delete_variable("var-1").await.unwrap();
    }
}
