//! S3 key data models

use serde::{Deserialize, Serialize};

use crate::ionos::merge::pick;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3KeyProperties {
    /// Only returned when the key is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl NamedProperties for S3KeyProperties {}

/// An S3 key; its id is the access key
pub type S3Key = Entity<S3KeyProperties>;

/// PUT body for an S3 key update; the secret is never sent back
pub fn merged(existing: &S3KeyProperties, overrides: &S3KeyProperties) -> S3KeyProperties {
    S3KeyProperties {
        secret_key: None,
        active: pick(&overrides.active, &existing.active),
    }
}
