//! Group share command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, WaitArgs};

/// Share subcommands
#[derive(Subcommand, Debug)]
pub enum ShareCommand {
    /// List the resources shared with a group
    #[command(visible_alias = "ls")]
    List(ShareListArgs),
    /// Get a share of a group
    #[command(visible_alias = "g")]
    Get(ShareGetArgs),
    /// Share a resource with a group
    #[command(visible_alias = "c")]
    Create(ShareWriteArgs),
    /// Update the privileges of a share; privileges not given keep their value
    #[command(visible_alias = "u")]
    Update(ShareWriteArgs),
    /// Stop sharing a resource, or every resource of the group with --all
    #[command(visible_alias = "d")]
    Delete(ShareDeleteArgs),
}

#[derive(Args, Debug)]
pub struct ShareListArgs {
    /// The unique Group Id
    #[arg(long = "group-id")]
    pub group_id: String,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct ShareGetArgs {
    /// The unique Group Id
    #[arg(long = "group-id")]
    pub group_id: String,
    /// The unique Resource Id
    #[arg(short = 'i', long = "resource-id")]
    pub resource_id: String,
}

#[derive(Args, Debug)]
pub struct ShareWriteArgs {
    /// The unique Group Id
    #[arg(long = "group-id")]
    pub group_id: String,
    /// The unique Resource Id
    #[arg(short = 'i', long = "resource-id")]
    pub resource_id: String,
    /// The group may edit the shared resource (--edit-privilege=false to revoke)
    #[arg(long = "edit-privilege", num_args = 0..=1, default_missing_value = "true")]
    pub edit_privilege: Option<bool>,
    /// The group may share the resource further (--share-privilege=false to revoke)
    #[arg(long = "share-privilege", num_args = 0..=1, default_missing_value = "true")]
    pub share_privilege: Option<bool>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct ShareDeleteArgs {
    /// The unique Group Id
    #[arg(long = "group-id")]
    pub group_id: String,
    /// The unique Resource Id
    #[arg(
        short = 'i',
        long = "resource-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub resource_id: Option<String>,
    /// Delete all shares of the group
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}
