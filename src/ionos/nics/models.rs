//! NIC data models

use serde::{Deserialize, Serialize};

use crate::config::create_defaults;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

/// Properties of a network interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NicProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Assigned by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_type: Option<String>,
    /// Assigned by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_number: Option<i32>,
    /// Assigned by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pci_slot: Option<i32>,
}

impl NicProperties {
    pub fn with_create_defaults(mut self) -> Self {
        self.name
            .get_or_insert_with(|| create_defaults::NIC_NAME.to_string());
        self.lan.get_or_insert(create_defaults::NIC_LAN);
        self.dhcp.get_or_insert(create_defaults::NIC_DHCP);
        self
    }
}

impl NamedProperties for NicProperties {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

pub type Nic = Entity<NicProperties>;
