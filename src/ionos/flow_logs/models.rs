//! Flow log data models

use serde::{Deserialize, Serialize};

use crate::config::create_defaults;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

/// Properties of a flow log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowLogProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ACCEPTED, REJECTED or ALL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// INGRESS, EGRESS or BIDIRECTIONAL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Target S3 bucket, optionally with a key prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

impl FlowLogProperties {
    pub fn with_create_defaults(mut self) -> Self {
        self.name
            .get_or_insert_with(|| create_defaults::FLOW_LOG_NAME.to_string());
        self.action
            .get_or_insert_with(|| create_defaults::FLOW_LOG_ACTION.to_string());
        self.direction
            .get_or_insert_with(|| create_defaults::FLOW_LOG_DIRECTION.to_string());
        self
    }
}

impl NamedProperties for FlowLogProperties {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

pub type FlowLog = Entity<FlowLogProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let props = FlowLogProperties {
            bucket: Some("logs/nic".to_string()),
            direction: Some("EGRESS".to_string()),
            ..Default::default()
        }
        .with_create_defaults();
        assert_eq!(props.name.as_deref(), Some("Unnamed Flow Log"));
        assert_eq!(props.action.as_deref(), Some("ALL"));
        assert_eq!(props.direction.as_deref(), Some("EGRESS"));
        assert_eq!(props.bucket.as_deref(), Some("logs/nic"));
    }
}
