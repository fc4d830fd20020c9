//! Group command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, WaitArgs};

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    /// List groups
    #[command(visible_alias = "ls")]
    List(ListArgs),
    /// Get a group
    #[command(visible_alias = "g")]
    Get(GroupIdArgs),
    /// Create a group
    #[command(visible_alias = "c")]
    Create(GroupCreateArgs),
    /// Update a group; properties not given keep their current value
    #[command(visible_alias = "u")]
    Update(GroupUpdateArgs),
    /// Delete a group, or every group with --all
    #[command(visible_alias = "d")]
    Delete(GroupDeleteArgs),
    /// Manage the members of a group
    #[command(subcommand)]
    User(GroupUserCommand),
}

/// Group member subcommands
#[derive(Subcommand, Debug)]
pub enum GroupUserCommand {
    /// List the users of a group
    #[command(visible_alias = "ls")]
    List(GroupIdArgs),
    /// Add a user to a group
    Add(GroupMemberArgs),
    /// Remove a user from a group
    #[command(visible_alias = "rm")]
    Remove(GroupMemberArgs),
}

#[derive(Args, Debug)]
pub struct GroupIdArgs {
    /// The unique Group Id
    #[arg(short = 'i', long = "group-id")]
    pub group_id: String,
}

#[derive(Args, Debug)]
pub struct GroupMemberArgs {
    /// The unique Group Id
    #[arg(short = 'i', long = "group-id")]
    pub group_id: String,
    /// The unique User Id
    #[arg(long = "user-id")]
    pub user_id: String,
    #[command(flatten)]
    pub wait: WaitArgs,
}

/// Group privileges; each flag takes an optional `=false`
#[derive(Args, Debug, Clone, Default)]
pub struct GroupFields {
    /// Name for the group
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// The group will be allowed to create virtual data centers
    #[arg(long = "create-dc", num_args = 0..=1, default_missing_value = "true")]
    pub create_data_center: Option<bool>,
    /// The group will be allowed to create snapshots
    #[arg(long = "create-snapshot", num_args = 0..=1, default_missing_value = "true")]
    pub create_snapshot: Option<bool>,
    /// The group will be allowed to reserve IP addresses
    #[arg(long = "reserve-ip", num_args = 0..=1, default_missing_value = "true")]
    pub reserve_ip: Option<bool>,
    /// The group will be allowed to access the activity log
    #[arg(long = "access-logs", num_args = 0..=1, default_missing_value = "true")]
    pub access_activity_log: Option<bool>,
    /// The group will be allowed to create Private Cross Connects
    #[arg(long = "create-pcc", num_args = 0..=1, default_missing_value = "true")]
    pub create_pcc: Option<bool>,
    /// The group will be allowed to manage S3
    #[arg(long = "s3privilege", num_args = 0..=1, default_missing_value = "true")]
    pub s3_privilege: Option<bool>,
    /// The group will be allowed to create backup units
    #[arg(long = "create-backup", num_args = 0..=1, default_missing_value = "true")]
    pub create_backup_unit: Option<bool>,
    /// The group will be allowed to create internet access
    #[arg(long = "create-nic", num_args = 0..=1, default_missing_value = "true")]
    pub create_internet_access: Option<bool>,
    /// The group will be allowed to create Kubernetes clusters
    #[arg(long = "create-k8s", num_args = 0..=1, default_missing_value = "true")]
    pub create_k8s_cluster: Option<bool>,
    /// The group will be allowed to create flow logs
    #[arg(long = "create-flowlog", num_args = 0..=1, default_missing_value = "true")]
    pub create_flow_log: Option<bool>,
    /// The group will be allowed to access and manage monitoring
    #[arg(long = "access-monitoring", num_args = 0..=1, default_missing_value = "true")]
    pub access_and_manage_monitoring: Option<bool>,
    /// The group will be allowed to access and manage certificates
    #[arg(long = "access-certs", num_args = 0..=1, default_missing_value = "true")]
    pub access_and_manage_certificates: Option<bool>,
    /// The group will be allowed to manage DBaaS
    #[arg(long = "manage-dbaas", num_args = 0..=1, default_missing_value = "true")]
    pub manage_dbaas: Option<bool>,
}

#[derive(Args, Debug)]
pub struct GroupCreateArgs {
    #[command(flatten)]
    pub fields: GroupFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct GroupUpdateArgs {
    /// The unique Group Id
    #[arg(short = 'i', long = "group-id")]
    pub group_id: String,
    #[command(flatten)]
    pub fields: GroupFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct GroupDeleteArgs {
    /// The unique Group Id
    #[arg(
        short = 'i',
        long = "group-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub group_id: Option<String>,
    /// Delete all groups
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}
