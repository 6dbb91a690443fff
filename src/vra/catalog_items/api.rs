//! Catalog item API operations

use crate::config::api;
use crate::error::Result;
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::CatalogItem;

impl VraClient {
    /// Get catalog items (server-side search and page/size paging)
    pub async fn get_catalog_items(&self, query: &Query) -> Result<Vec<CatalogItem>> {
        let path = format!("{}{}", api::CATALOG_ITEMS, query.to_page_params());
        self.get_content_page(&path, "fetch catalog items").await
    }

    /// Get a single catalog item by ID; returns the typed model and raw JSON
    pub async fn get_catalog_item_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(CatalogItem, serde_json::Value)>> {
        self.get_resource(
            &format!("{}/{}", api::CATALOG_ITEMS, id),
            &format!("catalog item '{}'", id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VraError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "type": { "id": "com.vmw.blueprint", "name": "Cloud Template" }
        })
    }

    #[tokio::test]
    async fn test_get_catalog_items_success() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/catalog/api/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [item_json("cat-1", "ubuntu-vm"), item_json("cat-2", "rhel-vm")],
                "totalElements": 2
            })))
            .mount(&mock_server)
            .await;

        let items = client.get_catalog_items(&Query::new()).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "ubuntu-vm");
    }

    #[tokio::test]
    async fn test_get_catalog_items_with_search() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/catalog/api/items"))
            .and(query_param("search", "ubuntu"))
            .and(query_param("size", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [item_json("cat-1", "ubuntu-vm")],
                "totalElements": 1
            })))
            .mount(&mock_server)
            .await;

        let query = Query::new().search("ubuntu").top(Some(20));
        let items = client.get_catalog_items(&query).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_get_catalog_item_by_id_not_found() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/catalog/api/items/cat-missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client.get_catalog_item_by_id("cat-missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_catalog_items_api_error() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/catalog/api/items"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = client.get_catalog_items(&Query::new()).await.unwrap_err();
        match err {
            VraError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected VraError::Api, got {:?}", other),
        }
    }
}
