//! Resource data models

use serde::{Deserialize, Serialize};

use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_auth_protection: Option<bool>,
}

impl NamedProperties for ResourceProperties {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Any resource visible to the account; `kind` tells its type
pub type Resource = Entity<ResourceProperties>;
