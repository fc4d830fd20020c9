//! Credential and endpoint resolution from multiple sources

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;

use crate::config::{api, env};
use crate::error::{IonosError, Result};

use super::models::ConfigFile;

/// Credentials used to authenticate against the API
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Bearer token
    Token(String),
    /// Username and password
    Basic { username: String, password: String },
}

impl Credentials {
    /// Value of the `Authorization` header
    pub fn authorization_header(&self) -> String {
        match self {
            Credentials::Token(token) => format!("Bearer {}", token),
            Credentials::Basic { username, password } => {
                format!("Basic {}", BASE64.encode(format!("{}:{}", username, password)))
            }
        }
    }
}

// Never print secrets in debug logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Token(_) => write!(f, "Token(****)"),
            Credentials::Basic { username, .. } => write!(f, "Basic({}, ****)", username),
        }
    }
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    env: fn(&str) -> Option<String>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver {
    /// Resolver reading the process environment
    pub fn new() -> Self {
        Self {
            env: |key| std::env::var(key).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Resolver with a custom environment lookup
    pub fn with_env(env: fn(&str) -> Option<String>) -> Self {
        Self { env }
    }

    /// Resolve credentials from multiple sources with fallback:
    /// 1. --token CLI argument
    /// 2. IONOS_TOKEN
    /// 3. IONOS_USERNAME + IONOS_PASSWORD
    /// 4. Token in the settings file
    /// 5. Username + password in the settings file
    pub fn resolve(
        &self,
        cli_token: Option<&str>,
        file: &ConfigFile,
        file_path: &Path,
    ) -> Result<Credentials> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(Credentials::Token(token.to_string()));
        }

        if let Some(token) = (self.env)(env::TOKEN) {
            debug!("Using token from {} environment variable", env::TOKEN);
            return Ok(Credentials::Token(token));
        }

        if let (Some(username), Some(password)) =
            ((self.env)(env::USERNAME), (self.env)(env::PASSWORD))
        {
            debug!(
                "Using username and password from {} and {}",
                env::USERNAME,
                env::PASSWORD
            );
            return Ok(Credentials::Basic { username, password });
        }

        if let Some(token) = &file.token {
            debug!("Using token from config file {}", file_path.display());
            return Ok(Credentials::Token(token.clone()));
        }

        if let (Some(username), Some(password)) = (&file.username, &file.password) {
            debug!(
                "Using username and password from config file {}",
                file_path.display()
            );
            return Ok(Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            });
        }

        Err(IonosError::CredentialsNotFound(format!(
            "No credentials found. Pass --token, set {} (or {} and {}), \
             or run 'ionosctl login' to store them in {}",
            env::TOKEN,
            env::USERNAME,
            env::PASSWORD,
            file_path.display()
        )))
    }

    /// Resolve the API URL: CLI flag, then IONOS_API_URL, then settings file, then default
    pub fn resolve_api_url(&self, cli_url: Option<&str>, file: &ConfigFile) -> String {
        let raw = cli_url
            .map(str::to_string)
            .or_else(|| (self.env)(env::API_URL))
            .or_else(|| file.api_url.clone());

        match raw {
            Some(url) => {
                let normalized = normalize_api_url(&url);
                debug!("Using API URL {}", normalized);
                normalized
            }
            None => api::DEFAULT_URL.to_string(),
        }
    }
}

/// Turn a host or partial URL into a full Cloud API v6 URL
///
/// `api.ionos.com` becomes `https://api.ionos.com/cloudapi/v6`; URLs already
/// ending in the API path are kept as they are.
pub fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if with_scheme.ends_with(api::BASE_PATH) {
        with_scheme
    } else {
        format!("{}{}", with_scheme, api::BASE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn token_env(key: &str) -> Option<String> {
        (key == env::TOKEN).then(|| "env-token".to_string())
    }

    fn basic_env(key: &str) -> Option<String> {
        match key {
            env::USERNAME => Some("env-user".to_string()),
            env::PASSWORD => Some("env-pass".to_string()),
            _ => None,
        }
    }

    fn path() -> &'static Path {
        Path::new("/home/me/.ionosctl/config.json")
    }

    #[test]
    fn test_cli_token_wins() {
        let resolver = CredentialResolver::with_env(token_env);
        let creds = resolver
            .resolve(Some("cli-token"), &ConfigFile::default(), path())
            .unwrap();
        assert_eq!(creds, Credentials::Token("cli-token".to_string()));
    }

    #[test]
    fn test_env_token_before_file() {
        let resolver = CredentialResolver::with_env(token_env);
        let file = ConfigFile {
            token: Some("file-token".to_string()),
            ..Default::default()
        };
        let creds = resolver.resolve(None, &file, path()).unwrap();
        assert_eq!(creds, Credentials::Token("env-token".to_string()));
    }

    #[test]
    fn test_env_basic_auth() {
        let resolver = CredentialResolver::with_env(basic_env);
        let creds = resolver
            .resolve(None, &ConfigFile::default(), path())
            .unwrap();
        assert_eq!(
            creds,
            Credentials::Basic {
                username: "env-user".to_string(),
                password: "env-pass".to_string()
            }
        );
    }

    #[test]
    fn test_file_token_before_file_basic() {
        let resolver = CredentialResolver::with_env(no_env);
        let file = ConfigFile {
            token: Some("file-token".to_string()),
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        let creds = resolver.resolve(None, &file, path()).unwrap();
        assert_eq!(creds, Credentials::Token("file-token".to_string()));
    }

    #[test]
    fn test_missing_credentials_names_every_source() {
        let resolver = CredentialResolver::with_env(no_env);
        let err = resolver
            .resolve(None, &ConfigFile::default(), path())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("--token"));
        assert!(msg.contains(env::TOKEN));
        assert!(msg.contains("ionosctl login"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn test_bearer_header() {
        let creds = Credentials::Token("abc".to_string());
        assert_eq!(creds.authorization_header(), "Bearer abc");
    }

    #[test]
    fn test_basic_header() {
        let creds = Credentials::Basic {
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        // base64("user:pass")
        assert_eq!(creds.authorization_header(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::Basic {
            username: "user".to_string(),
            password: "hunter2".to_string(),
        };
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("hunter2"));
        assert!(!format!("{:?}", Credentials::Token("secret".to_string())).contains("secret"));
    }

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(
            normalize_api_url("api.ionos.com"),
            "https://api.ionos.com/cloudapi/v6"
        );
    }

    #[test]
    fn test_normalize_keeps_full_url() {
        assert_eq!(
            normalize_api_url("https://api.ionos.com/cloudapi/v6/"),
            "https://api.ionos.com/cloudapi/v6"
        );
    }

    #[test]
    fn test_normalize_keeps_http_scheme() {
        assert_eq!(
            normalize_api_url("http://localhost:8080"),
            "http://localhost:8080/cloudapi/v6"
        );
    }

    #[test]
    fn test_api_url_defaults() {
        let resolver = CredentialResolver::with_env(no_env);
        assert_eq!(
            resolver.resolve_api_url(None, &ConfigFile::default()),
            api::DEFAULT_URL
        );
    }

    #[test]
    fn test_api_url_cli_before_file() {
        let resolver = CredentialResolver::with_env(no_env);
        let file = ConfigFile {
            api_url: Some("file.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolver.resolve_api_url(Some("cli.example.com"), &file),
            "https://cli.example.com/cloudapi/v6"
        );
        assert_eq!(
            resolver.resolve_api_url(None, &file),
            "https://file.example.com/cloudapi/v6"
        );
    }
}
