//! CLI argument parsing

mod common;
mod firewall_rule;
mod flow_log;
mod group;
mod loadbalancer;
mod nic;
mod resource;
mod settings;
mod share;
mod user;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{DatacenterArgs, ListArgs, NicArgs, OutputFormat, ServerArgs, WaitArgs};
pub use firewall_rule::{
    FirewallRuleCommand, FirewallRuleCreateArgs, FirewallRuleDeleteArgs, FirewallRuleFields,
    FirewallRuleGetArgs, FirewallRuleListArgs, FirewallRuleUpdateArgs,
};
pub use flow_log::{
    FlowLogCommand, FlowLogCreateArgs, FlowLogDeleteArgs, FlowLogFields, FlowLogGetArgs,
    FlowLogListArgs, FlowLogUpdateArgs,
};
pub use group::{
    GroupCommand, GroupCreateArgs, GroupDeleteArgs, GroupFields, GroupIdArgs, GroupMemberArgs,
    GroupUpdateArgs, GroupUserCommand,
};
pub use loadbalancer::{
    LoadbalancerCommand, LoadbalancerCreateArgs, LoadbalancerDeleteArgs, LoadbalancerFields,
    LoadbalancerGetArgs, LoadbalancerListArgs, LoadbalancerUpdateArgs,
};
pub use nic::{
    NicCommand, NicCreateArgs, NicDeleteArgs, NicFields, NicGetArgs, NicListArgs, NicUpdateArgs,
};
pub use resource::{
    RequestCommand, RequestGetArgs, RequestWaitArgs, ResourceCommand, ResourceGetArgs,
    ResourceListArgs,
};
pub use settings::{ConfigAction, LoginArgs};
pub use share::{ShareCommand, ShareDeleteArgs, ShareGetArgs, ShareListArgs, ShareWriteArgs};
pub use user::{
    S3KeyCommand, S3KeyCreateArgs, S3KeyDeleteArgs, S3KeyGetArgs, S3KeyListArgs,
    S3KeyUpdateArgs, UserCommand, UserCreateArgs, UserDeleteArgs, UserFields, UserIdArgs,
    UserUpdateArgs,
};

/// IONOS Cloud command-line client
#[derive(Parser, Debug)]
#[command(name = "ionosctl")]
#[command(version)]
#[command(about = "Manage IONOS Cloud resources from the command line", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
        ionosctl login\n  \
        ionosctl group list --cols GroupId,Name\n  \
        ionosctl firewallrule list --datacenter-id DC --server-id SRV --nic-id NIC -o json\n  \
        ionosctl nic delete --datacenter-id DC --server-id SRV --all --force -w")]
pub struct Cli {
    /// Cloud API URL or host (overrides IONOS_API_URL and the settings file)
    #[arg(short = 'u', long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// API token (overrides env vars and the settings file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path of the settings file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Columns to print in table and CSV output (comma separated, `all` for every column)
    #[arg(long, value_delimiter = ',', global = true)]
    pub cols: Option<Vec<String>>,

    /// Omit the header line of table and CSV output
    #[arg(long = "no-headers", default_value_t = false, global = true)]
    pub no_headers: bool,

    /// Suppress progress and success messages
    #[arg(short = 'q', long, default_value_t = false, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(short = 'f', long, default_value_t = false, global = true)]
    pub force: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the firewall rules of a NIC
    #[command(visible_alias = "fr", visible_alias = "firewall")]
    Firewallrule {
        #[command(subcommand)]
        command: FirewallRuleCommand,
    },

    /// Manage the flow logs of a NIC
    #[command(visible_alias = "fl")]
    Flowlog {
        #[command(subcommand)]
        command: FlowLogCommand,
    },

    /// Manage load balancers
    #[command(visible_alias = "lb")]
    Loadbalancer {
        #[command(subcommand)]
        command: LoadbalancerCommand,
    },

    /// Manage the network interfaces of a server
    #[command(visible_alias = "n")]
    Nic {
        #[command(subcommand)]
        command: NicCommand,
    },

    /// Manage groups and their members
    #[command(visible_alias = "g")]
    Group {
        #[command(subcommand)]
        command: GroupCommand,
    },

    /// Manage the resources shared with a group
    #[command(visible_alias = "sh")]
    Share {
        #[command(subcommand)]
        command: ShareCommand,
    },

    /// Manage users
    #[command(visible_alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Manage the S3 keys of a user
    #[command(visible_alias = "k")]
    S3key {
        #[command(subcommand)]
        command: S3KeyCommand,
    },

    /// Inspect resources available to the account
    #[command(visible_alias = "res")]
    Resource {
        #[command(subcommand)]
        command: ResourceCommand,
    },

    /// Inspect and wait for asynchronous requests
    #[command(visible_alias = "req")]
    Request {
        #[command(subcommand)]
        command: RequestCommand,
    },

    /// Verify credentials and store them in the settings file
    Login(LoginArgs),

    /// Remove stored credentials from the settings file
    Logout,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the command reference as markdown
    #[command(hide = true)]
    Docs,
}
