//! Aria Automation HTTP client
//!
//! One client instance is built per invocation from the resolved target and
//! carries the bearer token the connection manager validated. All resource
//! modules go through the generic fetch helpers here.

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, VraError};
use crate::target::Target;
use crate::vra::traits::{ContentPage, DocumentsPage};

/// Structured exception payload returned by the services on error statuses
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "errorCode")]
    error_code: Option<serde_json::Value>,
}

/// Aria Automation API client
pub struct VraClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl VraClient {
    /// Create a new client for the given target with pooled connections.
    /// The target must carry a validated access token at this point.
    pub fn new(target: &Target, insecure: bool) -> Result<Self> {
        let access_token = target.access_token.clone().ok_or_else(|| {
            VraError::Config(format!("Target '{}' has no access token", target.name))
        })?;

        let client = Client::builder()
            .danger_accept_invalid_certs(insecure)
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            access_token,
            base_url: target.base_url(),
        })
    }

    /// Create a client pointed at an arbitrary base URL (mock servers)
    #[cfg(test)]
    pub fn with_base_url(access_token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes.
    ///
    /// Error statuses carry a structured exception payload (message plus an
    /// error code); when present it is folded into the error text.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| {
                    body.message.map(|m| match body.error_code {
                        Some(code) => format!("{} (error code {})", m, code),
                        None => m,
                    })
                });
            let message = match detail {
                Some(d) => format!("Failed to {}: {}", error_context, d),
                None => format!("Failed to {}", error_context),
            };
            return Err(VraError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a single content page (caller controls paging via the query)
    pub async fn get_content_page<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let page: ContentPage<T> = self.parse_api_response(response, error_context).await?;
        Ok(page.content)
    }

    /// Fetch every content page of an endpoint with parallel fetching.
    ///
    /// Page 1 is fetched first to learn `totalElements`; the remaining
    /// `$skip` offsets are then fetched concurrently (bounded) and stitched
    /// back together in offset order.
    pub async fn fetch_all_content_pages<T>(
        &self,
        path: &str,
        error_context: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let page_size = api::DEFAULT_PAGE_SIZE as u64;

        let first_url = format!(
            "{}{}{}$top={}&$skip=0",
            self.base_url, path, separator, page_size
        );
        debug!("Fetching first page from: {}", first_url);

        let response = self.get(&first_url).send().await?;
        let first: ContentPage<T> = self.parse_api_response(response, error_context).await?;

        let mut all_items = first.content;
        let total = match first.total_elements {
            Some(total) => total,
            None => return Ok(all_items), // no counter = single page
        };
        if total <= all_items.len() as u64 {
            return Ok(all_items);
        }

        let offsets: Vec<u64> = (1..total.div_ceil(page_size)).map(|i| i * page_size).collect();
        debug!(
            "Fetching {} remaining pages in parallel (max {} concurrent) for {}",
            offsets.len(),
            api::MAX_CONCURRENT_PAGE_REQUESTS,
            error_context
        );

        let page_futures = offsets.into_iter().map(|skip| {
            let url = format!(
                "{}{}{}$top={}&$skip={}",
                self.base_url, path, separator, page_size, skip
            );
            async move {
                debug!("Fetching page at $skip={} from: {}", skip, url);
                let response = self.get(&url).send().await?;
                let page_context = format!("{} ($skip {})", error_context, skip);
                let page: ContentPage<T> = self.parse_api_response(response, &page_context).await?;
                Ok::<_, VraError>((skip, page.content))
            }
        });

        let results: Vec<Result<(u64, Vec<T>)>> = stream::iter(page_futures)
            .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
            .collect()
            .await;

        let mut pages: Vec<(u64, Vec<T>)> = Vec::with_capacity(results.len());
        for result in results {
            pages.push(result?);
        }
        pages.sort_by_key(|(skip, _)| *skip);
        for (_, items) in pages {
            all_items.extend(items);
        }

        debug!("Fetched {} total items for {}", all_items.len(), error_context);
        Ok(all_items)
    }

    /// Fetch a documents-map list (pipeline service shape)
    pub async fn get_documents<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let page: DocumentsPage<T> = self.parse_api_response(response, error_context).await?;
        Ok(page.into_items())
    }

    /// Fetch a single resource by API path.
    ///
    /// Returns both the typed model and the raw JSON (for `--out json|yaml`),
    /// `None` for 404, and an error for other non-success statuses.
    pub async fn get_resource<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<(T, serde_json::Value)>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T = serde_json::from_value(raw.clone()).map_err(|e| VraError::Api {
                    status: 200,
                    message: format!("Failed to parse {}: {}", resource_label, e),
                })?;
                Ok(Some((item, raw)))
            }
            404 => Ok(None),
            status => Err(VraError::Api {
                status,
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }

    /// POST a JSON body and parse the JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B, error_context: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} ({})", url, error_context);

        let response = self.post(&url).json(body).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// POST a raw YAML body (pipeline import) and parse the JSON response
    pub async fn post_yaml<T>(&self, path: &str, body: String, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} ({}, yaml body)", url, error_context);

        let response = self
            .post(&url)
            .header("Content-Type", "application/x-yaml")
            .body(body)
            .send()
            .await?;
        self.parse_api_response(response, error_context).await
    }

    /// PUT a JSON body and parse the JSON response
    pub async fn put_json<B, T>(&self, path: &str, body: &B, error_context: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("PUT {} ({})", url, error_context);

        let response = self.put(&url).json(body).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// DELETE a resource by path, treating any success status as done
    pub async fn delete_resource(&self, path: &str, resource_label: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("DELETE {}", url);

        let response = self.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VraError::Api {
                status: status.as_u16(),
                message: format!("Failed to delete {}", resource_label),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct TestItem {
        id: String,
        name: String,
    }

    fn item_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "name": name })
    }

    #[tokio::test]
    async fn test_bearer_header_is_sent() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("token-abc", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(header("Authorization", "Bearer token-abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "content": [item_json("i-1", "one")] })),
            )
            .mount(&mock_server)
            .await;

        let items = client
            .get_content_page::<TestItem>("/items", "fetch items")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "one");
    }

    #[tokio::test]
    async fn test_fetch_all_content_pages_single_page() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("$skip", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [item_json("i-1", "one"), item_json("i-2", "two")],
                "totalElements": 2,
                "numberOfElements": 2
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_content_pages::<TestItem>("/items", "fetch items")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_content_pages_parallel_keeps_order() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        // 250 total elements with a page size of 100: offsets 0, 100, 200
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("$skip", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": (0..100).map(|i| item_json(&format!("i-{:03}", i), "x")).collect::<Vec<_>>(),
                "totalElements": 250
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("$skip", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": (100..200).map(|i| item_json(&format!("i-{:03}", i), "x")).collect::<Vec<_>>(),
                "totalElements": 250
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("$skip", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": (200..250).map(|i| item_json(&format!("i-{:03}", i), "x")).collect::<Vec<_>>(),
                "totalElements": 250
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_content_pages::<TestItem>("/items", "fetch items")
            .await
            .unwrap();
        assert_eq!(items.len(), 250);
        assert_eq!(items[0].id, "i-000");
        assert_eq!(items[100].id, "i-100");
        assert_eq!(items[249].id, "i-249");
    }

    #[tokio::test]
    async fn test_fetch_all_content_pages_respects_existing_query() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("$filter", "name eq 'x'"))
            .and(query_param("$skip", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [item_json("i-1", "x")],
                "totalElements": 1
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_content_pages::<TestItem>("/items?$filter=name%20eq%20%27x%27", "fetch items")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_api_error_includes_structured_payload() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "Insufficient permissions",
                "errorCode": 90135
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .get_content_page::<TestItem>("/items", "fetch items")
            .await
            .unwrap_err();
        match err {
            VraError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("Insufficient permissions"));
                assert!(message.contains("90135"));
            }
            other => panic!("Expected VraError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_api_error_without_payload() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = client
            .get_content_page::<TestItem>("/items", "fetch items")
            .await
            .unwrap_err();
        match err {
            VraError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("fetch items"));
            }
            other => panic!("Expected VraError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_documents_returns_values() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/docs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 2,
                "totalCount": 2,
                "documents": {
                    "id-b": item_json("id-b", "beta"),
                    "id-a": item_json("id-a", "alpha")
                }
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .get_documents::<TestItem>("/docs", "fetch docs")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "alpha"); // key order
    }

    #[tokio::test]
    async fn test_get_resource_found_and_missing() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items/i-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json("i-1", "one")))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/items/i-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let found = client
            .get_resource::<TestItem>("/items/i-1", "item 'i-1'")
            .await
            .unwrap();
        let (item, raw) = found.unwrap();
        assert_eq!(item.name, "one");
        assert_eq!(raw["id"], "i-1");

        let missing = client
            .get_resource::<TestItem>("/items/i-404", "item 'i-404'")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_resource() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/items/i-1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/items/i-2"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        assert!(client.delete_resource("/items/i-1", "item 'i-1'").await.is_ok());
        let err = client
            .delete_resource("/items/i-2", "item 'i-2'")
            .await
            .unwrap_err();
        match err {
            VraError::Api { status, .. } => assert_eq!(status, 403),
            other => panic!("Expected VraError::Api, got {:?}", other),
        }
    }
}
