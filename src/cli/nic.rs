//! NIC command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, ServerArgs, WaitArgs};

/// NIC subcommands
#[derive(Subcommand, Debug)]
pub enum NicCommand {
    /// List NICs of a server
    #[command(visible_alias = "ls")]
    List(NicListArgs),
    /// Get a NIC
    #[command(visible_alias = "g")]
    Get(NicGetArgs),
    /// Create a NIC
    #[command(visible_alias = "c")]
    Create(NicCreateArgs),
    /// Update a NIC
    #[command(visible_alias = "u")]
    Update(NicUpdateArgs),
    /// Delete a NIC, or every NIC of the server with --all
    #[command(visible_alias = "d")]
    Delete(NicDeleteArgs),
}

#[derive(Args, Debug)]
pub struct NicListArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct NicGetArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    /// The unique NIC Id
    #[arg(short = 'i', long = "nic-id")]
    pub nic_id: String,
}

/// Optional NIC properties
#[derive(Args, Debug, Clone, Default)]
pub struct NicFields {
    /// The name of the NIC
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// IPs assigned to the NIC (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub ips: Option<Vec<String>>,
    /// Whether the NIC gets its IPs from DHCP (--dhcp=false to disable)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub dhcp: Option<bool>,
    /// The LAN ID the NIC is connected to
    #[arg(long = "lan-id")]
    pub lan: Option<i32>,
    /// Activate the firewall of the NIC (--firewall-active=false to disable)
    #[arg(long = "firewall-active", num_args = 0..=1, default_missing_value = "true")]
    pub firewall_active: Option<bool>,
    /// Type of the firewall: INGRESS, EGRESS or BIDIRECTIONAL
    #[arg(long = "firewall-type")]
    pub firewall_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct NicCreateArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub fields: NicFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct NicUpdateArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    /// The unique NIC Id
    #[arg(short = 'i', long = "nic-id")]
    pub nic_id: String,
    #[command(flatten)]
    pub fields: NicFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct NicDeleteArgs {
    #[command(flatten)]
    pub server: ServerArgs,
    /// The unique NIC Id
    #[arg(
        short = 'i',
        long = "nic-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub nic_id: Option<String>,
    /// Delete all NICs of the server
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}
