//! Firewall rule API operations

use crate::config::api;
use crate::error::Result;
use crate::ionos::bulk::BulkDeletable;
use crate::ionos::Accepted;
use crate::ionos::models::{ListQuery, NicScope, PropertiesBody};
use crate::ionos::IonosClient;

use super::models::{FirewallRule, FirewallRuleProperties};

fn rules_path(scope: &NicScope) -> String {
    format!("{}/{}", scope.path(), api::FIREWALL_RULES)
}

fn rule_path(scope: &NicScope, rule_id: &str) -> String {
    format!("{}/{}", rules_path(scope), rule_id)
}

impl IonosClient {
    /// List the firewall rules of a NIC
    pub async fn list_firewall_rules(
        &self,
        scope: &NicScope,
        query: &ListQuery,
    ) -> Result<Vec<FirewallRule>> {
        self.fetch_collection(&rules_path(scope), query, "firewall rules")
            .await
    }

    /// Get a firewall rule by id
    pub async fn get_firewall_rule(&self, scope: &NicScope, rule_id: &str) -> Result<FirewallRule> {
        self.require_resource(&rule_path(scope, rule_id), "firewall rule")
            .await
    }

    /// Create a firewall rule
    pub async fn create_firewall_rule(
        &self,
        scope: &NicScope,
        properties: FirewallRuleProperties,
    ) -> Result<Accepted<FirewallRule>> {
        self.post_json(
            &rules_path(scope),
            &PropertiesBody::new(properties),
            "Failed to create firewall rule",
        )
        .await
    }

    /// Partially update a firewall rule; only the set properties are sent
    pub async fn update_firewall_rule(
        &self,
        scope: &NicScope,
        rule_id: &str,
        properties: &FirewallRuleProperties,
    ) -> Result<Accepted<FirewallRule>> {
        self.patch_json(
            &rule_path(scope, rule_id),
            properties,
            "Failed to update firewall rule",
        )
        .await
    }

    /// Delete a firewall rule
    pub async fn delete_firewall_rule(
        &self,
        scope: &NicScope,
        rule_id: &str,
    ) -> Result<Option<String>> {
        self.delete_path(&rule_path(scope, rule_id), "Failed to delete firewall rule")
            .await
    }
}

/// The firewall rules of one NIC
pub struct FirewallRuleSet {
    pub scope: NicScope,
}

impl BulkDeletable for FirewallRuleSet {
    type Item = FirewallRule;
    const KIND: &'static str = "firewall rule";
    const KIND_PLURAL: &'static str = "firewall rules";

    async fn list(&self, client: &IonosClient) -> Result<Vec<FirewallRule>> {
        client
            .list_firewall_rules(&self.scope, &ListQuery::default())
            .await
    }

    async fn delete(&self, client: &IonosClient, id: &str) -> Result<Option<String>> {
        client.delete_firewall_rule(&self.scope, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scope() -> NicScope {
        NicScope {
            datacenter_id: "dc-1".to_string(),
            server_id: "srv-1".to_string(),
            nic_id: "nic-1".to_string(),
        }
    }

    const RULES: &str = "/datacenters/dc-1/servers/srv-1/nics/nic-1/firewallrules";

    #[tokio::test]
    async fn test_list_firewall_rules() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(RULES))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"id": "fw-1", "properties": {"name": "ssh", "protocol": "TCP"}},
                    {"id": "fw-2", "properties": {"protocol": "ICMP"}}
                ]
            })))
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let rules = client
            .list_firewall_rules(&scope(), &ListQuery::default())
            .await
            .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].properties.name.as_deref(), Some("ssh"));
    }

    #[tokio::test]
    async fn test_update_sends_patch_with_set_fields_only() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("{}/fw-1", RULES)))
            .and(body_json(serde_json::json!({"portRangeStart": 80, "portRangeEnd": 80})))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("Location", "https://api/cloudapi/v6/requests/req-9/status")
                    .set_body_json(serde_json::json!({"id": "fw-1", "properties": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let props = FirewallRuleProperties {
            port_range_start: Some(80),
            port_range_end: Some(80),
            ..Default::default()
        };
        let accepted = client
            .update_firewall_rule(&scope(), "fw-1", &props)
            .await
            .unwrap();
        assert_eq!(accepted.body.id, "fw-1");
        assert_eq!(accepted.request_id.as_deref(), Some("req-9"));
    }

    #[tokio::test]
    async fn test_delete_firewall_rule() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/fw-1", RULES)))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = IonosClient::test_client(&server.uri());
        let request_id = client.delete_firewall_rule(&scope(), "fw-1").await.unwrap();
        assert!(request_id.is_none());
    }
}
