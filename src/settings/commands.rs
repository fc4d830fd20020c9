//! Login, logout and config command handlers

use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use dialoguer::{Input, Password};

use crate::cli::{ConfigAction, LoginArgs};
use crate::ionos::IonosClient;
use crate::ui::{create_spinner, finish_spinner};

use super::models::ConfigFile;
use super::resolve::Credentials;
use super::store::SettingsStore;
use super::token::TokenClaims;
use super::Settings;

/// Verify credentials against the API and store them in the settings file
pub async fn run_login_command(
    store: &SettingsStore,
    settings: &Settings,
    cli_token: Option<&str>,
    args: &LoginArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = match cli_token {
        Some(token) => Credentials::Token(token.to_string()),
        None => {
            let username = match &args.username {
                Some(u) => u.clone(),
                None => Input::<String>::new()
                    .with_prompt("Username")
                    .interact_text()?,
            };
            let password = match &args.password {
                Some(p) => p.clone(),
                None => Password::new().with_prompt("Password").interact()?,
            };
            Credentials::Basic { username, password }
        }
    };

    let client = IonosClient::new(credentials.clone(), settings.api_url.clone());
    let spinner = create_spinner("Checking credentials...", settings.output.quiet);
    let checked = client.check_authentication().await;
    finish_spinner(spinner, if checked.is_ok() { "Done" } else { "Failed" });
    checked?;

    let mut file = store.load()?;
    file.set_credentials(&credentials);
    if settings.api_url != crate::config::api::DEFAULT_URL {
        file.api_url = Some(settings.api_url.clone());
    }
    store.save(&file)?;

    println!(
        "✓ Authentication successful. Credentials saved to {}",
        store.path().display()
    );
    Ok(())
}

/// Remove stored credentials
pub fn run_logout_command(store: &SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = store.load()?;
    if file.token.is_none() && file.username.is_none() && file.password.is_none() {
        println!("No credentials stored in {}", store.path().display());
        return Ok(());
    }
    file.clear_credentials();
    store.save(&file)?;
    println!("✓ Removed credentials from {}", store.path().display());
    Ok(())
}

/// Dispatch config subcommands
pub fn run_config_command(
    store: &SettingsStore,
    action: &ConfigAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::View => run_config_view(store),
        ConfigAction::Location => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

fn run_config_view(store: &SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let file = store.load()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("KEY"), Cell::new("VALUE")]);

    for (key, value) in config_rows(&file) {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }

    println!("Config file: {}", store.path().display());
    println!("{table}");
    Ok(())
}

fn config_rows(file: &ConfigFile) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        (
            "api-url",
            file.api_url
                .clone()
                .unwrap_or_else(|| format!("{} (default)", crate::config::api::DEFAULT_URL)),
        ),
        ("token", mask_secret(file.token.as_deref())),
        (
            "username",
            file.username.clone().unwrap_or_else(|| "<not set>".to_string()),
        ),
        ("password", mask_secret(file.password.as_deref())),
    ];

    if let Some(claims) = file.token.as_deref().and_then(|t| TokenClaims::parse(t).ok()) {
        let expiry = match claims.expires_at() {
            Some(exp) if claims.is_expired_at(Utc::now()) => {
                format!("{} (expired)", exp.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            Some(exp) => exp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => "<never>".to_string(),
        };
        rows.push(("token-expires", expiry));
        if let Some(iat) = claims.issued_at() {
            rows.push(("token-issued", iat.format("%Y-%m-%d %H:%M:%S UTC").to_string()));
        }
        if let Some(contract) = claims.identity.and_then(|i| i.contract_number) {
            rows.push(("contract-number", contract.to_string()));
        }
    }

    rows
}

/// Mask a secret for display: show last 4 chars or "<not set>"
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) if s.len() >= 8 => format!("****{}", &s[s.len() - 4..]),
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}
