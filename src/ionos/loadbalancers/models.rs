//! Load balancer data models

use serde::{Deserialize, Serialize};

use crate::config::create_defaults;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadbalancerProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<bool>,
}

impl LoadbalancerProperties {
    pub fn with_create_defaults(mut self) -> Self {
        self.name
            .get_or_insert_with(|| create_defaults::LOADBALANCER_NAME.to_string());
        self.dhcp.get_or_insert(create_defaults::LOADBALANCER_DHCP);
        self
    }
}

impl NamedProperties for LoadbalancerProperties {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

pub type Loadbalancer = Entity<LoadbalancerProperties>;
