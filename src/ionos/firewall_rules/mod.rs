//! Firewall rules of a server NIC

mod api;
mod commands;
mod models;

pub use api::FirewallRuleSet;
pub use commands::run_firewallrule_command;
pub use models::{FirewallRule, FirewallRuleProperties};
