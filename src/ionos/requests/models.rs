//! Request tracking models

use serde::{Deserialize, Serialize};

use crate::ionos::traits::ApiResource;

/// Execution state of an asynchronous request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestState {
    Queued,
    Running,
    Done,
    Failed,
    #[serde(other)]
    Unknown,
}

impl RequestState {
    /// Whether the request will not change state any more
    pub fn is_finished(&self) -> bool {
        matches!(self, RequestState::Done | RequestState::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Queued => "QUEUED",
            RequestState::Running => "RUNNING",
            RequestState::Done => "DONE",
            RequestState::Failed => "FAILED",
            RequestState::Unknown => "UNKNOWN",
        }
    }
}

/// Resource touched by a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatusMetadata {
    pub status: RequestState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<RequestTarget>,
}

/// Response of `GET /requests/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestStatus {
    #[serde(default)]
    pub id: String,
    pub metadata: RequestStatusMetadata,
}

impl RequestStatus {
    pub fn state(&self) -> &RequestState {
        &self.metadata.status
    }

    pub fn message(&self) -> &str {
        self.metadata.message.as_deref().unwrap_or("no message")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_status: Option<RequestStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A request as returned by `GET /requests[/{id}]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    #[serde(default)]
    pub metadata: RequestMetadata,
    #[serde(default)]
    pub properties: RequestProperties,
}

impl Request {
    /// Status embedded at depth >= 1
    pub fn status(&self) -> Option<&RequestState> {
        self.metadata.request_status.as_ref().map(|s| s.state())
    }

    /// Ids of the resources touched by the request
    pub fn target_ids(&self) -> Vec<&str> {
        self.metadata
            .request_status
            .iter()
            .flat_map(|s| s.metadata.targets.iter())
            .filter_map(|t| t.target.as_ref().and_then(|r| r.id.as_deref()))
            .collect()
    }
}

impl ApiResource for Request {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn state(&self) -> Option<&str> {
        self.status().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_targets() {
        let json = r#"{
            "id": "req-1",
            "type": "request-status",
            "metadata": {
                "status": "DONE",
                "message": "Request has been successfully executed",
                "targets": [{"target": {"id": "fw-1", "type": "firewall-rule"}, "status": "DONE"}]
            }
        }"#;
        let status: RequestStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state(), &RequestState::Done);
        assert!(status.state().is_finished());
        assert_eq!(status.metadata.targets.len(), 1);
    }

    #[test]
    fn test_unknown_state_tolerated() {
        let json = r#"{"id": "req-1", "metadata": {"status": "PAUSED"}}"#;
        let status: RequestStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state(), &RequestState::Unknown);
        assert!(!status.state().is_finished());
        assert_eq!(status.message(), "no message");
    }

    #[test]
    fn test_request_with_embedded_status() {
        let json = r#"{
            "id": "req-2",
            "metadata": {
                "createdDate": "2024-03-01T12:00:00Z",
                "requestStatus": {
                    "id": "req-2",
                    "metadata": {"status": "RUNNING", "targets": [{"target": {"id": "nic-1"}}]}
                }
            },
            "properties": {"method": "DELETE", "url": "https://api.ionos.com/cloudapi/v6/x"}
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(request.status(), Some(&RequestState::Running));
        assert_eq!(ApiResource::state(&request), Some("RUNNING"));
        assert_eq!(request.target_ids(), vec!["nic-1"]);
        assert_eq!(request.properties.method.as_deref(), Some("DELETE"));
    }
}
