//! Flow log API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::models::{ListQuery, NicScope, PropertiesBody};
use crate::ionos::{Accepted, IonosClient};

use super::models::{FlowLog, FlowLogProperties};

fn flow_logs_path(scope: &NicScope) -> String {
    format!("{}/{}", scope.path(), api::FLOW_LOGS)
}

impl IonosClient {
    pub async fn list_flow_logs(&self, scope: &NicScope, query: &ListQuery) -> Result<Vec<FlowLog>> {
        self.fetch_collection(&flow_logs_path(scope), query, "flow logs")
            .await
    }

    pub async fn get_flow_log(&self, scope: &NicScope, flow_log_id: &str) -> Result<FlowLog> {
        self.require_resource(
            &format!("{}/{}", flow_logs_path(scope), flow_log_id),
            "flow log",
        )
        .await
    }

    pub async fn create_flow_log(
        &self,
        scope: &NicScope,
        properties: FlowLogProperties,
    ) -> Result<Accepted<FlowLog>> {
        self.post_json(
            &flow_logs_path(scope),
            &PropertiesBody::new(properties),
            "Failed to create flow log",
        )
        .await
    }

    /// PATCH with the given properties only
    pub async fn update_flow_log(
        &self,
        scope: &NicScope,
        flow_log_id: &str,
        properties: &FlowLogProperties,
    ) -> Result<Accepted<FlowLog>> {
        self.patch_json(
            &format!("{}/{}", flow_logs_path(scope), flow_log_id),
            properties,
            "Failed to update flow log",
        )
        .await
    }

    pub async fn delete_flow_log(&self, scope: &NicScope, flow_log_id: &str) -> Result<Option<String>> {
        self.delete_path(
            &format!("{}/{}", flow_logs_path(scope), flow_log_id),
            "Failed to delete flow log",
        )
        .await
    }
}

/// The flow logs of one NIC
pub struct FlowLogSet {
    pub scope: NicScope,
}

impl BulkDeletable for FlowLogSet {
    type Item = FlowLog;
    const KIND: &'static str = "flow log";
    const KIND_PLURAL: &'static str = "flow logs";

    async fn list(&self, client: &IonosClient) -> Result<Vec<FlowLog>> {
        client.list_flow_logs(&self.scope, &ListQuery::default()).await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_flow_log(&self.scope, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_flow_log_wraps_properties() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/datacenters/dc/servers/srv/nics/nic/flowlogs"))
            .and(body_json(serde_json::json!({
                "properties": {"name": "fl", "action": "ALL", "direction": "INGRESS", "bucket": "b"}
            })))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(serde_json::json!({"id": "fl-1", "properties": {"name": "fl"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let scope = NicScope {
            datacenter_id: "dc".to_string(),
            server_id: "srv".to_string(),
            nic_id: "nic".to_string(),
        };
        let props = FlowLogProperties {
            name: Some("fl".to_string()),
            bucket: Some("b".to_string()),
            ..Default::default()
        }
        .with_create_defaults();
        let accepted = client.create_flow_log(&scope, props).await.unwrap();
        assert_eq!(accepted.body.id, "fl-1");
    }
}
