//! Typed runtime settings
//!
//! Everything a command handler needs to know about global flags, the
//! settings file and the environment is resolved once in `main` into a
//! [`Settings`] value that is passed by reference to every handler.

mod commands;
mod models;
mod resolve;
mod store;
mod token;

use std::time::Duration;

use crate::cli::{Cli, WaitArgs};
use crate::config::{api, defaults};
use crate::output::OutputOptions;

pub use commands::{run_config_command, run_login_command, run_logout_command};
pub use models::ConfigFile;
pub use resolve::{normalize_api_url, CredentialResolver, Credentials};
pub use store::SettingsStore;
pub use token::{TokenClaims, TokenIdentity};

/// Global options shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    /// Full Cloud API URL
    pub api_url: String,
    /// Output rendering options
    pub output: OutputOptions,
    /// Skip confirmation prompts
    pub force: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: api::DEFAULT_URL.to_string(),
            output: OutputOptions::default(),
            force: false,
        }
    }
}

impl Settings {
    /// Build settings from parsed CLI flags and the settings file
    pub fn from_cli(cli: &Cli, file: &ConfigFile, resolver: &CredentialResolver) -> Self {
        Self {
            api_url: resolver.resolve_api_url(cli.api_url.as_deref(), file),
            output: OutputOptions {
                format: cli.output,
                cols: cli.cols.clone(),
                no_headers: cli.no_headers,
                quiet: cli.quiet,
            },
            force: cli.force,
        }
    }
}

/// How a mutating command treats the asynchronous request it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Poll the request until it finishes
    pub enabled: bool,
    /// Give up after this long
    pub timeout: Duration,
    /// Delay between status polls
    pub interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout: Duration::from_secs(defaults::WAIT_TIMEOUT_SECS),
            interval: Duration::from_millis(defaults::POLL_INTERVAL_MS),
        }
    }
}

impl WaitOptions {
    /// Waiting enabled with the given timeout
    pub fn waiting(timeout: Duration) -> Self {
        Self {
            enabled: true,
            timeout,
            ..Default::default()
        }
    }

    /// Override the poll interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl From<&WaitArgs> for WaitOptions {
    fn from(args: &WaitArgs) -> Self {
        Self {
            enabled: args.wait_for_request,
            timeout: Duration::from_secs(args.timeout),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use clap::Parser;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_settings_from_cli_flags() {
        let cli = Cli::parse_from([
            "ionosctl",
            "--api-url",
            "api.example.com",
            "-o",
            "json",
            "--cols",
            "Name,State",
            "--no-headers",
            "-q",
            "-f",
            "group",
            "list",
        ]);
        let settings = Settings::from_cli(
            &cli,
            &ConfigFile::default(),
            &CredentialResolver::with_env(no_env),
        );

        assert_eq!(settings.api_url, "https://api.example.com/cloudapi/v6");
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(
            settings.output.cols,
            Some(vec!["Name".to_string(), "State".to_string()])
        );
        assert!(settings.output.no_headers);
        assert!(settings.output.quiet);
        assert!(settings.force);
    }

    #[test]
    fn test_settings_defaults() {
        let cli = Cli::parse_from(["ionosctl", "group", "list"]);
        let settings = Settings::from_cli(
            &cli,
            &ConfigFile::default(),
            &CredentialResolver::with_env(no_env),
        );
        assert_eq!(settings.api_url, api::DEFAULT_URL);
        assert_eq!(settings.output.format, OutputFormat::Table);
        assert!(settings.output.cols.is_none());
        assert!(!settings.force);
    }

    #[test]
    fn test_wait_options_from_args() {
        let args = WaitArgs {
            wait_for_request: true,
            timeout: 120,
        };
        let opts = WaitOptions::from(&args);
        assert!(opts.enabled);
        assert_eq!(opts.timeout, Duration::from_secs(120));
        assert_eq!(opts.interval, Duration::from_millis(defaults::POLL_INTERVAL_MS));
    }

    #[test]
    fn test_wait_options_default_disabled() {
        assert!(!WaitOptions::default().enabled);
        let opts = WaitOptions::waiting(Duration::from_secs(5))
            .with_interval(Duration::from_millis(10));
        assert!(opts.enabled);
        assert_eq!(opts.interval, Duration::from_millis(10));
    }
}
