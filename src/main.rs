//! ionosctl - Main entry point

use chrono::Utc;
use clap::Parser;
use log::{debug, info, warn};

use ionosctl::cli::{Cli, Command};
use ionosctl::ionos::{
    run_firewallrule_command, run_flowlog_command, run_group_command, run_loadbalancer_command,
    run_nic_command, run_request_command, run_resource_command, run_s3key_command,
    run_share_command, run_user_command, IonosClient,
};
use ionosctl::settings::{
    run_config_command, run_login_command, run_logout_command, CredentialResolver, Credentials,
    Settings, SettingsStore, TokenClaims,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ionosctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::resolve(cli.config.as_deref());
    debug!("Settings file: {}", store.path().display());

    // Commands that never talk to the API
    match &cli.command {
        Command::Docs => {
            println!("{}", clap_markdown::help_markdown::<Cli>());
            return Ok(());
        }
        Command::Config { action } => return run_config_command(&store, action),
        Command::Logout => return run_logout_command(&store),
        _ => {}
    }

    let file = store.load()?;
    let resolver = CredentialResolver::new();
    let settings = Settings::from_cli(&cli, &file, &resolver);
    debug!("API URL: {}", settings.api_url);

    if let Command::Login(args) = &cli.command {
        return run_login_command(&store, &settings, cli.token.as_deref(), args).await;
    }

    let credentials = resolver.resolve(cli.token.as_deref(), &file, store.path())?;
    if let Credentials::Token(token) = &credentials {
        warn_if_expired(token);
    }
    let client = IonosClient::new(credentials, settings.api_url.clone());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    match &cli.command {
        Command::Firewallrule { command } => {
            run_firewallrule_command(&client, &settings, command, &mut input).await
        }
        Command::Flowlog { command } => {
            run_flowlog_command(&client, &settings, command, &mut input).await
        }
        Command::Loadbalancer { command } => {
            run_loadbalancer_command(&client, &settings, command, &mut input).await
        }
        Command::Nic { command } => run_nic_command(&client, &settings, command, &mut input).await,
        Command::Group { command } => {
            run_group_command(&client, &settings, command, &mut input).await
        }
        Command::Share { command } => {
            run_share_command(&client, &settings, command, &mut input).await
        }
        Command::User { command } => {
            run_user_command(&client, &settings, command, &mut input).await
        }
        Command::S3key { command } => {
            run_s3key_command(&client, &settings, command, &mut input).await
        }
        Command::Resource { command } => run_resource_command(&client, &settings, command).await,
        Command::Request { command } => run_request_command(&client, &settings, command).await,
        Command::Login(_) | Command::Logout | Command::Config { .. } | Command::Docs => Ok(()),
    }
}

fn warn_if_expired(token: &str) {
    match TokenClaims::parse(token) {
        Ok(claims) if claims.is_expired_at(Utc::now()) => {
            warn!("The API token has expired; run 'ionosctl login' to store a new one");
        }
        Ok(_) => {}
        Err(e) => debug!("Could not inspect token: {}", e),
    }
}
