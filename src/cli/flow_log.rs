//! Flow log command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, NicArgs, WaitArgs};

/// Flow log subcommands
#[derive(Subcommand, Debug)]
pub enum FlowLogCommand {
    /// List flow logs of a NIC
    #[command(visible_alias = "ls")]
    List(FlowLogListArgs),
    /// Get a flow log
    #[command(visible_alias = "g")]
    Get(FlowLogGetArgs),
    /// Create a flow log
    #[command(visible_alias = "c")]
    Create(FlowLogCreateArgs),
    /// Update a flow log
    #[command(visible_alias = "u")]
    Update(FlowLogUpdateArgs),
    /// Delete a flow log, or every flow log of the NIC with --all
    #[command(visible_alias = "d")]
    Delete(FlowLogDeleteArgs),
}

#[derive(Args, Debug)]
pub struct FlowLogListArgs {
    #[command(flatten)]
    pub nic: NicArgs,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct FlowLogGetArgs {
    #[command(flatten)]
    pub nic: NicArgs,
    /// The unique FlowLog Id
    #[arg(short = 'i', long = "flowlog-id")]
    pub flow_log_id: String,
}

/// Optional flow log properties
#[derive(Args, Debug, Clone, Default)]
pub struct FlowLogFields {
    /// The name for the flow log
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// Traffic to log: ACCEPTED, REJECTED or ALL
    #[arg(long)]
    pub action: Option<String>,
    /// Direction of the traffic: INGRESS, EGRESS or BIDIRECTIONAL
    #[arg(long)]
    pub direction: Option<String>,
}

#[derive(Args, Debug)]
pub struct FlowLogCreateArgs {
    #[command(flatten)]
    pub nic: NicArgs,
    /// S3 bucket name of an existing bucket, optionally with a key prefix
    #[arg(long = "s3bucket")]
    pub bucket: String,
    #[command(flatten)]
    pub fields: FlowLogFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct FlowLogUpdateArgs {
    #[command(flatten)]
    pub nic: NicArgs,
    /// The unique FlowLog Id
    #[arg(short = 'i', long = "flowlog-id")]
    pub flow_log_id: String,
    /// S3 bucket name of an existing bucket, optionally with a key prefix
    #[arg(long = "s3bucket")]
    pub bucket: Option<String>,
    #[command(flatten)]
    pub fields: FlowLogFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct FlowLogDeleteArgs {
    #[command(flatten)]
    pub nic: NicArgs,
    /// The unique FlowLog Id
    #[arg(
        short = 'i',
        long = "flowlog-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub flow_log_id: Option<String>,
    /// Delete all flow logs of the NIC
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}
