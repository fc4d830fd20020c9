//! Group share data models

use serde::{Deserialize, Serialize};

use crate::ionos::merge::pick;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

/// Privileges a group holds on a shared resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_privilege: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_privilege: Option<bool>,
}

impl NamedProperties for ShareProperties {}

/// A share; its id is the id of the shared resource
pub type Share = Entity<ShareProperties>;

pub fn merged(existing: &ShareProperties, overrides: &ShareProperties) -> ShareProperties {
    ShareProperties {
        edit_privilege: pick(&overrides.edit_privilege, &existing.edit_privilege),
        share_privilege: pick(&overrides.share_privilege, &existing.share_privilege),
    }
}
