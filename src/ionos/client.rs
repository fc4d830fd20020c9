//! IONOS Cloud HTTP client for API interactions

use log::debug;
use reqwest::header::LOCATION;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{IonosError, Result};
use crate::ionos::models::{Collection, ListQuery};
use crate::settings::Credentials;

/// Response of an accepted asynchronous mutation
#[derive(Debug, Clone)]
pub struct Accepted<T> {
    /// Resource as returned by the API
    pub body: T,
    /// Id of the request tracking the operation, from the `Location` header
    pub request_id: Option<String>,
}

/// Error body returned by the API
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    #[serde(default)]
    messages: Vec<ApiErrorMessage>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ApiErrorMessage {
    error_code: Option<String>,
    message: Option<String>,
}

/// IONOS Cloud API client
pub struct IonosClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl IonosClient {
    /// Create a new client for the given (already normalized) API URL
    pub fn new(credentials: Credentials, base_url: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(defaults::HTTP_TIMEOUT_SECS))
            .user_agent(concat!("ionosctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", self.credentials.authorization_header())
            .header("Content-Type", "application/json")
    }

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Build an `Api` error from a non-success response, keeping the API's
    /// own messages when the body carries them
    pub(crate) async fn api_error(response: Response, context: &str) -> IonosError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let details = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .map(|b| {
                b.messages
                    .into_iter()
                    .filter_map(|m| match (m.error_code, m.message) {
                        (Some(code), Some(msg)) => Some(format!("[{}] {}", code, msg)),
                        (None, Some(msg)) => Some(msg),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|d| !d.is_empty());

        let message = match details {
            Some(d) => format!("{}: {}", context, d.join("; ")),
            None => context.to_string(),
        };
        IonosError::Api { status, message }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::api_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Check that the credentials are accepted by the API
    pub async fn check_authentication(&self) -> Result<()> {
        let url = format!("{}/", self.base_url);
        debug!("Checking credentials against {}", url);
        let response = self.get(&url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response, "Authentication failed").await)
        }
    }

    /// Fetch every item of a collection endpoint
    pub async fn fetch_collection<T>(
        &self,
        path: &str,
        query: &ListQuery,
        error_context: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.url(path), query.to_query_string());
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let collection: Collection<T> = self.parse_api_response(response, error_context).await?;
        let items = collection.into_items();

        debug!("Fetched {} items for {}", items.len(), error_context);
        Ok(items)
    }

    /// Fetch a single resource by API path, `None` on 404
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}?depth={}", self.url(path), api::DEFAULT_DEPTH);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            404 => Ok(None),
            _ => Ok(Some(
                self.parse_api_response(
                    response,
                    &format!("Failed to fetch {}", resource_label),
                )
                .await?,
            )),
        }
    }

    /// Fetch a single resource, failing with a 404 `Api` error when missing
    pub async fn require_resource<T>(&self, path: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.fetch_resource_by_path(path, resource_label)
            .await?
            .ok_or_else(|| IonosError::Api {
                status: 404,
                message: format!("{} not found", capitalize(resource_label)),
            })
    }

    /// Send a mutation (POST/PUT/PATCH) and capture the request id
    pub(crate) async fn send_mutation<T>(
        &self,
        builder: reqwest::RequestBuilder,
        error_context: &str,
    ) -> Result<Accepted<T>>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let request_id = request_id_from_response(&response);
        let body = self.parse_api_response(response, error_context).await?;
        Ok(Accepted { body, request_id })
    }

    /// POST a JSON body to a path
    pub async fn post_json<B, T>(&self, path: &str, body: &B, error_context: &str) -> Result<Accepted<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        self.send_mutation(self.post(&url).json(body), error_context)
            .await
    }

    /// POST to a path without a body
    pub async fn post_empty<T>(&self, path: &str, error_context: &str) -> Result<Accepted<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        self.send_mutation(self.post(&url), error_context).await
    }

    /// PUT a JSON body to a path
    pub async fn put_json<B, T>(&self, path: &str, body: &B, error_context: &str) -> Result<Accepted<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PUT {}", url);
        self.send_mutation(self.put(&url).json(body), error_context)
            .await
    }

    /// PATCH a JSON body to a path
    pub async fn patch_json<B, T>(
        &self,
        path: &str,
        body: &B,
        error_context: &str,
    ) -> Result<Accepted<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PATCH {}", url);
        self.send_mutation(self.patch(&url).json(body), error_context)
            .await
    }

    /// DELETE a path, returning the id of the request tracking the deletion
    pub async fn delete_path(&self, path: &str, error_context: &str) -> Result<Option<String>> {
        let url = self.url(path);
        debug!("DELETE {}", url);

        let response = self.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response, error_context).await);
        }
        Ok(request_id_from_response(&response))
    }
}

/// Extract the request id from a `Location` header such as
/// `https://api.ionos.com/cloudapi/v6/requests/<id>/status`
pub fn request_id_from_location(location: &str) -> Option<String> {
    let mut segments = location.split('/');
    segments.by_ref().find(|s| *s == api::REQUESTS)?;
    segments
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn request_id_from_response(response: &Response) -> Option<String> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    let id = request_id_from_location(location);
    debug!("Request location: {} (id: {:?})", location, id);
    id
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
impl IonosClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            Credentials::Token("test-token".to_string()),
            base_url.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ionos::models::Entity;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug, Default, Clone)]
    struct TestProps {
        name: Option<String>,
    }

    type TestItem = Entity<TestProps>;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let client = IonosClient::test_client("https://api.example.com/cloudapi/v6/");
        assert_eq!(client.base_url(), "https://api.example.com/cloudapi/v6");
    }

    #[test]
    fn test_request_id_from_location() {
        assert_eq!(
            request_id_from_location(
                "https://api.ionos.com/cloudapi/v6/requests/3f7e1c2a-aaaa-bbbb/status"
            ),
            Some("3f7e1c2a-aaaa-bbbb".to_string())
        );
        assert_eq!(request_id_from_location("https://api.ionos.com/cloudapi/v6/"), None);
        assert_eq!(request_id_from_location("/requests/"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("firewall rule 'x'"), "Firewall rule 'x'");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn test_fetch_collection_sends_auth_and_depth() {
        let mock_server = MockServer::start().await;
        let client = IonosClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("depth", "1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "things",
                "type": "collection",
                "items": [
                    { "id": "a", "properties": { "name": "first" } },
                    { "id": "b", "properties": { "name": "second" } }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items: Vec<TestItem> = client
            .fetch_collection("/things", &ListQuery::default(), "things")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].properties.name.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_fetch_collection_api_error_keeps_messages() {
        let mock_server = MockServer::start().await;
        let client = IonosClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "httpStatus": 401,
                "messages": [{ "errorCode": "315", "message": "Unauthorized" }]
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .fetch_collection::<TestItem>("/things", &ListQuery::default(), "Failed to list things")
            .await
            .unwrap_err();

        match err {
            IonosError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Failed to list things: [315] Unauthorized");
            }
            other => panic!("Expected IonosError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_resource_by_path_not_found() {
        let mock_server = MockServer::start().await;
        let client = IonosClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result: Option<TestItem> = client
            .fetch_resource_by_path("/things/missing", "thing 'missing'")
            .await
            .unwrap();
        assert!(result.is_none());

        let err = client
            .require_resource::<TestItem>("/things/missing", "thing 'missing'")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Thing 'missing' not found"));
    }

    #[tokio::test]
    async fn test_post_json_captures_request_id() {
        let mock_server = MockServer::start().await;
        let client = IonosClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .and(body_json(serde_json::json!({ "properties": { "name": "new" } })))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header(
                        "Location",
                        format!("{}/requests/req-42/status", mock_server.uri()).as_str(),
                    )
                    .set_body_json(serde_json::json!({
                        "id": "c",
                        "properties": { "name": "new" }
                    })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let accepted: Accepted<TestItem> = client
            .post_json(
                "/things",
                &serde_json::json!({ "properties": { "name": "new" } }),
                "Failed to create thing",
            )
            .await
            .unwrap();

        assert_eq!(accepted.body.id, "c");
        assert_eq!(accepted.request_id.as_deref(), Some("req-42"));
    }

    #[tokio::test]
    async fn test_delete_path_without_location() {
        let mock_server = MockServer::start().await;
        let client = IonosClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/things/a"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request_id = client
            .delete_path("/things/a", "Failed to delete thing")
            .await
            .unwrap();
        assert!(request_id.is_none());
    }

    #[tokio::test]
    async fn test_check_authentication_rejected() {
        let mock_server = MockServer::start().await;
        let client = IonosClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = client.check_authentication().await.unwrap_err();
        assert!(matches!(err, IonosError::Api { status: 401, .. }));
    }
}
