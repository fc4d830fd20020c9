//! Settings file data models

use serde::{Deserialize, Serialize};

use super::resolve::Credentials;

/// Contents of `~/.ionosctl/config.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Username for basic authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for basic authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// API URL override
    #[serde(rename = "api-url", default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl ConfigFile {
    /// Replace stored credentials, keeping only the kind that was given
    pub fn set_credentials(&mut self, credentials: &Credentials) {
        match credentials {
            Credentials::Token(token) => {
                self.token = Some(token.clone());
                self.username = None;
                self.password = None;
            }
            Credentials::Basic { username, password } => {
                self.token = None;
                self.username = Some(username.clone());
                self.password = Some(password.clone());
            }
        }
    }

    /// Forget every stored credential, keeping the API URL
    pub fn clear_credentials(&mut self) {
        self.token = None;
        self.username = None;
        self.password = None;
    }

    /// Whether any credential is stored
    pub fn has_credentials(&self) -> bool {
        self.token.is_some() || (self.username.is_some() && self.password.is_some())
    }
}
