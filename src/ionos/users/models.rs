//! User data models

use serde::{Deserialize, Serialize};

use crate::ionos::merge::pick;
use crate::ionos::models::Entity;
use crate::ionos::traits::NamedProperties;

/// Properties of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_sec_auth: Option<bool>,
    /// Whether the user has two-factor authentication set up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_auth_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_canonical_user_id: Option<String>,
    /// Write only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UserProperties {
    /// `First Last`, empty when neither is known
    pub fn full_name(&self) -> String {
        [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl NamedProperties for UserProperties {
    fn name(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

pub type User = Entity<UserProperties>;

/// PUT body for a user update
///
/// The password is only sent when a new one was given, `secAuthActive`
/// is carried over from the server and the read-only canonical id is
/// dropped.
pub fn merged(existing: &UserProperties, overrides: &UserProperties) -> UserProperties {
    UserProperties {
        firstname: pick(&overrides.firstname, &existing.firstname),
        lastname: pick(&overrides.lastname, &existing.lastname),
        email: pick(&overrides.email, &existing.email),
        administrator: pick(&overrides.administrator, &existing.administrator),
        force_sec_auth: pick(&overrides.force_sec_auth, &existing.force_sec_auth),
        sec_auth_active: existing.sec_auth_active,
        s3_canonical_user_id: None,
        password: overrides.password.clone(),
        active: pick(&overrides.active, &existing.active),
    }
}
