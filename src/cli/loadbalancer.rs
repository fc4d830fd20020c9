//! Load balancer command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{DatacenterArgs, ListArgs, WaitArgs};

/// Load balancer subcommands
#[derive(Subcommand, Debug)]
pub enum LoadbalancerCommand {
    /// List load balancers of a datacenter
    #[command(visible_alias = "ls")]
    List(LoadbalancerListArgs),
    /// Get a load balancer
    #[command(visible_alias = "g")]
    Get(LoadbalancerGetArgs),
    /// Create a load balancer
    #[command(visible_alias = "c")]
    Create(LoadbalancerCreateArgs),
    /// Update a load balancer
    #[command(visible_alias = "u")]
    Update(LoadbalancerUpdateArgs),
    /// Delete a load balancer, or every load balancer of the datacenter with --all
    #[command(visible_alias = "d")]
    Delete(LoadbalancerDeleteArgs),
}

#[derive(Args, Debug)]
pub struct LoadbalancerListArgs {
    #[command(flatten)]
    pub datacenter: DatacenterArgs,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct LoadbalancerGetArgs {
    #[command(flatten)]
    pub datacenter: DatacenterArgs,
    /// The unique Load Balancer Id
    #[arg(short = 'i', long = "loadbalancer-id")]
    pub loadbalancer_id: String,
}

/// Optional load balancer properties
#[derive(Args, Debug, Clone, Default)]
pub struct LoadbalancerFields {
    /// Name of the load balancer
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// IPv4 address of the load balancer
    #[arg(long)]
    pub ip: Option<String>,
    /// Whether the load balancer gets its IP from DHCP (--dhcp=false to disable)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub dhcp: Option<bool>,
}

#[derive(Args, Debug)]
pub struct LoadbalancerCreateArgs {
    #[command(flatten)]
    pub datacenter: DatacenterArgs,
    #[command(flatten)]
    pub fields: LoadbalancerFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct LoadbalancerUpdateArgs {
    #[command(flatten)]
    pub datacenter: DatacenterArgs,
    /// The unique Load Balancer Id
    #[arg(short = 'i', long = "loadbalancer-id")]
    pub loadbalancer_id: String,
    #[command(flatten)]
    pub fields: LoadbalancerFields,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct LoadbalancerDeleteArgs {
    #[command(flatten)]
    pub datacenter: DatacenterArgs,
    /// The unique Load Balancer Id
    #[arg(
        short = 'i',
        long = "loadbalancer-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub loadbalancer_id: Option<String>,
    /// Delete all load balancers of the datacenter
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,
    #[command(flatten)]
    pub wait: WaitArgs,
}
