//! IONOS Cloud API client module
//!
//! This module provides the HTTP client, shared envelopes and one
//! submodule per resource (API calls, command handlers and models).

pub mod bulk;
mod client;
pub mod firewall_rules;
pub mod flow_logs;
pub mod groups;
pub mod loadbalancers;
pub mod merge;
pub mod models;
pub mod nics;
pub mod requests;
pub mod resources;
pub mod s3keys;
pub mod shares;
pub mod traits;
pub mod users;

pub use bulk::{BulkDeletable, BulkDeleteReport};
pub use client::{request_id_from_location, Accepted, IonosClient};
pub use firewall_rules::{run_firewallrule_command, FirewallRule, FirewallRuleProperties};
pub use flow_logs::{run_flowlog_command, FlowLog, FlowLogProperties};
pub use groups::{run_group_command, Group, GroupProperties};
pub use loadbalancers::{run_loadbalancer_command, Loadbalancer, LoadbalancerProperties};
pub use models::{
    Collection, DatacenterScope, Entity, ListQuery, Metadata, NicScope, PropertiesBody,
    ServerScope,
};
pub use nics::{run_nic_command, Nic, NicProperties};
pub use requests::{run_request_command, wait_for_request, Request, RequestState, RequestStatus};
pub use resources::{run_resource_command, Resource, ResourceProperties};
pub use s3keys::{run_s3key_command, S3Key, S3KeyProperties};
pub use shares::{run_share_command, Share, ShareProperties};
pub use traits::{ApiResource, NamedProperties};
pub use users::{run_user_command, User, UserProperties};
