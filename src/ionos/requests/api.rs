//! Request API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::models::ListQuery;
use crate::ionos::IonosClient;

use super::models::{Request, RequestStatus};

impl IonosClient {
    /// Current status of an asynchronous request
    pub async fn get_request_status(&self, request_id: &str) -> Result<RequestStatus> {
        self.require_resource(
            &format!("/{}/{}/status", api::REQUESTS, request_id),
            "request status",
        )
        .await
    }

    /// A single request with its properties
    pub async fn get_request(&self, request_id: &str) -> Result<Request> {
        self.require_resource(&format!("/{}/{}", api::REQUESTS, request_id), "request")
            .await
    }

    /// List recent requests
    pub async fn list_requests(&self, query: &ListQuery) -> Result<Vec<Request>> {
        self.fetch_collection(&format!("/{}", api::REQUESTS), query, "requests")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IonosError;
    use crate::ionos::requests::RequestState;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_request_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/req-1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "req-1",
                "metadata": {"status": "QUEUED"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let status = client.get_request_status("req-1").await.unwrap();
        assert_eq!(status.state(), &RequestState::Queued);
    }

    #[tokio::test]
    async fn test_get_request_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let err = client.get_request("missing").await.unwrap_err();
        match err {
            IonosError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Request not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_requests_with_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/requests"))
            .and(query_param("filter.method", "DELETE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "req-1"}, {"id": "req-2"}]
            })))
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let query = ListQuery {
            filters: vec![("method".to_string(), "DELETE".to_string())],
            ..Default::default()
        };
        let requests = client.list_requests(&query).await.unwrap();
        assert_eq!(requests.len(), 2);
    }
}
