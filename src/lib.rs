//! ionosctl - Manage IONOS Cloud resources from the command line
//!
//! A CLI tool for the IONOS Cloud API v6.
//!
//! # Features
//!
//! - Network resources: NICs, firewall rules, flow logs, load balancers
//! - User management: groups, members, shares, users, S3 keys, resources
//! - Waiting for the asynchronous requests started by mutations
//! - Bulk delete with a single confirmation
//! - Multiple output formats (table, CSV, JSON, YAML) with column selection
//!
//! # Example
//!
//! ```bash
//! # Store credentials
//! ionosctl login
//!
//! # List groups with two columns
//! ionosctl group list --cols GroupId,Name
//!
//! # Create a firewall rule and wait for it
//! ionosctl firewallrule create --datacenter-id DC --server-id SRV --nic-id NIC \
//!     --protocol TCP --port-range-start 22 --port-range-end 22 -w
//!
//! # Delete every NIC of a server
//! ionosctl nic delete --datacenter-id DC --server-id SRV --all --force
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ionos;
pub mod output;
pub mod settings;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{IonosError, Result};
pub use ionos::{ApiResource, IonosClient};
pub use output::{OutputOptions, TableRow};
pub use settings::{Settings, SettingsStore, WaitOptions};
