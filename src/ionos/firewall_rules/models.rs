//! Firewall rule data models

use serde::{Deserialize, Serialize};

use crate::config::create_defaults;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

/// Properties of a firewall rule
///
/// Every field is optional so the same type carries full server objects,
/// create bodies and partial PATCH bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirewallRuleProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_end: Option<i32>,
    /// Traffic direction: INGRESS or EGRESS
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<String>,
}

impl FirewallRuleProperties {
    /// Fill in the name and direction a new rule gets when none was given
    pub fn with_create_defaults(mut self) -> Self {
        self.name
            .get_or_insert_with(|| create_defaults::FIREWALL_RULE_NAME.to_string());
        self.rule_type
            .get_or_insert_with(|| create_defaults::FIREWALL_RULE_TYPE.to_string());
        self
    }
}

impl NamedProperties for FirewallRuleProperties {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

pub type FirewallRule = Entity<FirewallRuleProperties>;
