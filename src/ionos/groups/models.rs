//! Group data models

use serde::{Deserialize, Serialize};

use crate::config::create_defaults;
use crate::ionos::merge::pick;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

/// Name and privileges of a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_data_center: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_activity_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_pcc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_privilege: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_backup_unit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_internet_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_k8s_cluster: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_flow_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_and_manage_monitoring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_and_manage_certificates: Option<bool>,
    #[serde(rename = "manageDBaaS", skip_serializing_if = "Option::is_none")]
    pub manage_dbaas: Option<bool>,
}

impl GroupProperties {
    pub fn with_create_defaults(mut self) -> Self {
        self.name
            .get_or_insert_with(|| create_defaults::GROUP_NAME.to_string());
        self
    }
}

impl NamedProperties for GroupProperties {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

pub type Group = Entity<GroupProperties>;

/// PUT body for a group update
pub fn merged(existing: &GroupProperties, overrides: &GroupProperties) -> GroupProperties {
    GroupProperties {
        name: pick(&overrides.name, &existing.name),
        create_data_center: pick(&overrides.create_data_center, &existing.create_data_center),
        create_snapshot: pick(&overrides.create_snapshot, &existing.create_snapshot),
        reserve_ip: pick(&overrides.reserve_ip, &existing.reserve_ip),
        access_activity_log: pick(&overrides.access_activity_log, &existing.access_activity_log),
        create_pcc: pick(&overrides.create_pcc, &existing.create_pcc),
        s3_privilege: pick(&overrides.s3_privilege, &existing.s3_privilege),
        create_backup_unit: pick(&overrides.create_backup_unit, &existing.create_backup_unit),
        create_internet_access: pick(
            &overrides.create_internet_access,
            &existing.create_internet_access,
        ),
        create_k8s_cluster: pick(&overrides.create_k8s_cluster, &existing.create_k8s_cluster),
        create_flow_log: pick(&overrides.create_flow_log, &existing.create_flow_log),
        access_and_manage_monitoring: pick(
            &overrides.access_and_manage_monitoring,
            &existing.access_and_manage_monitoring,
        ),
        access_and_manage_certificates: pick(
            &overrides.access_and_manage_certificates,
            &existing.access_and_manage_certificates,
        ),
        manage_dbaas: pick(&overrides.manage_dbaas, &existing.manage_dbaas),
    }
}
