//! Firewall rule command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{ListArgs, NicArgs, WaitArgs};

/// Firewall rule subcommands
#[derive(Subcommand, Debug)]
pub enum FirewallRuleCommand {
    /// List firewall rules of a NIC
    #[command(visible_alias = "ls")]
    List(FirewallRuleListArgs),

    /// Get a firewall rule
    #[command(visible_alias = "g")]
    Get(FirewallRuleGetArgs),

    /// Create a firewall rule
    #[command(
        visible_alias = "c",
        after_help = "EXAMPLES:\n  \
        ionosctl firewallrule create --datacenter-id DC --server-id SRV --nic-id NIC --protocol TCP\n  \
        ionosctl firewallrule create --datacenter-id DC --server-id SRV --nic-id NIC --protocol TCP \\\n    \
        --port-range-start 22 --port-range-end 22 --source-ip 203.0.113.7"
    )]
    Create(FirewallRuleCreateArgs),

    /// Update a firewall rule (only the given properties change)
    #[command(visible_alias = "u")]
    Update(FirewallRuleUpdateArgs),

    /// Delete a firewall rule, or every rule of the NIC with --all
    #[command(visible_alias = "d")]
    Delete(FirewallRuleDeleteArgs),
}

#[derive(Args, Debug)]
pub struct FirewallRuleListArgs {
    #[command(flatten)]
    pub nic: NicArgs,
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Debug)]
pub struct FirewallRuleGetArgs {
    #[command(flatten)]
    pub nic: NicArgs,

    /// The unique FirewallRule Id
    #[arg(short = 'i', long = "firewallrule-id")]
    pub firewall_rule_id: String,
}

/// Optional firewall rule properties
#[derive(Args, Debug, Clone, Default)]
pub struct FirewallRuleFields {
    /// The name for the firewall rule
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Only traffic originating from this MAC address is allowed
    #[arg(long = "source-mac")]
    pub source_mac: Option<String>,

    /// Only traffic originating from this IP address is allowed
    #[arg(long = "source-ip")]
    pub source_ip: Option<String>,

    /// Only traffic directed to this IP address is allowed
    #[arg(long = "destination-ip")]
    pub destination_ip: Option<String>,

    /// ICMP code (0-254) for ICMP rules
    #[arg(long = "icmp-code")]
    pub icmp_code: Option<i32>,

    /// ICMP type (0-254) for ICMP rules
    #[arg(long = "icmp-type")]
    pub icmp_type: Option<i32>,

    /// First port of the allowed range (1-65534)
    #[arg(long = "port-range-start")]
    pub port_range_start: Option<i32>,

    /// Last port of the allowed range (1-65534)
    #[arg(long = "port-range-end")]
    pub port_range_end: Option<i32>,

    /// Direction of the traffic: INGRESS or EGRESS
    #[arg(long = "direction", visible_alias = "type")]
    pub direction: Option<String>,

    /// IP version: IPv4 or IPv6
    #[arg(long = "ip-version")]
    pub ip_version: Option<String>,
}

#[derive(Args, Debug)]
pub struct FirewallRuleCreateArgs {
    #[command(flatten)]
    pub nic: NicArgs,

    /// Protocol: TCP, UDP, ICMP, ICMPv6, GRE, VRRP, ESP, AH or ANY
    #[arg(short = 'p', long)]
    pub protocol: String,

    #[command(flatten)]
    pub fields: FirewallRuleFields,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct FirewallRuleUpdateArgs {
    #[command(flatten)]
    pub nic: NicArgs,

    /// The unique FirewallRule Id
    #[arg(short = 'i', long = "firewallrule-id")]
    pub firewall_rule_id: String,

    /// Protocol: TCP, UDP, ICMP, ICMPv6, GRE, VRRP, ESP, AH or ANY
    #[arg(short = 'p', long)]
    pub protocol: Option<String>,

    #[command(flatten)]
    pub fields: FirewallRuleFields,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct FirewallRuleDeleteArgs {
    #[command(flatten)]
    pub nic: NicArgs,

    /// The unique FirewallRule Id
    #[arg(
        short = 'i',
        long = "firewallrule-id",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub firewall_rule_id: Option<String>,

    /// Delete all firewall rules of the NIC
    #[arg(short = 'a', long, default_value_t = false)]
    pub all: bool,

    #[command(flatten)]
    pub wait: WaitArgs,
}
