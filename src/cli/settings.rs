//! Login and config management arguments

use clap::{Args, Subcommand};

/// Arguments for 'login'
#[derive(Args, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
        ionosctl login --username user@example.com\n  \
        ionosctl login --token <TOKEN>")]
pub struct LoginArgs {
    /// Username of the IONOS Cloud account (prompted when missing)
    #[arg(long)]
    pub username: Option<String>,
    /// Password of the IONOS Cloud account (prompted when missing)
    #[arg(long)]
    pub password: Option<String>,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Display the stored settings with secrets masked
    View,
    /// Print the path of the settings file
    Location,
}
