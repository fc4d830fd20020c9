//! Resource and request command definitions

use clap::{Args, Subcommand};

use super::common::ListArgs;
use crate::config::defaults;

/// Resource subcommands (read only)
#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// List resources available to the account, by type or for a group
    #[command(visible_alias = "ls")]
    List(ResourceListArgs),
    /// Get a resource by type and id
    #[command(visible_alias = "g")]
    Get(ResourceGetArgs),
}

#[derive(Args, Debug)]
pub struct ResourceListArgs {
    /// Only resources of this type, e.g. datacenter, snapshot, image, ipblock
    #[arg(long = "type", conflicts_with = "group_id")]
    pub resource_type: Option<String>,
    /// Resources assigned to this group
    #[arg(long = "group-id")]
    pub group_id: Option<String>,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct ResourceGetArgs {
    /// The type of the resource
    #[arg(long = "type")]
    pub resource_type: String,
    /// The unique Resource Id
    #[arg(short = 'i', long = "resource-id")]
    pub resource_id: String,
}

/// Request subcommands
#[derive(Subcommand, Debug)]
pub enum RequestCommand {
    /// List recent requests
    #[command(visible_alias = "ls")]
    List(ListArgs),
    /// Get a request
    #[command(visible_alias = "g")]
    Get(RequestGetArgs),
    /// Wait for a request to finish
    #[command(visible_alias = "w")]
    Wait(RequestWaitArgs),
}

#[derive(Args, Debug)]
pub struct RequestGetArgs {
    /// The unique Request Id
    #[arg(short = 'i', long = "request-id")]
    pub request_id: String,
}

#[derive(Args, Debug)]
pub struct RequestWaitArgs {
    /// The unique Request Id
    #[arg(short = 'i', long = "request-id")]
    pub request_id: String,
    /// Seconds to wait for the request to finish
    #[arg(short = 't', long, default_value_t = defaults::WAIT_TIMEOUT_SECS)]
    pub timeout: u64,
}
