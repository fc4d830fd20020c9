//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::config::{api, defaults};
use crate::error::Result;
use crate::ionos::{DatacenterScope, ListQuery, NicScope, ServerScope};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table with selectable columns (default)
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// JSON, as returned by the API
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Flags of every command that starts an asynchronous request
#[derive(Args, Debug, Clone)]
pub struct WaitArgs {
    /// Wait for the request to finish before returning
    #[arg(short = 'w', long = "wait-for-request", default_value_t = false)]
    pub wait_for_request: bool,

    /// Seconds to wait for the request to finish
    #[arg(short = 't', long, default_value_t = defaults::WAIT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Query flags of list commands
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Filter by property, e.g. --filters name=web (repeatable)
    #[arg(short = 'F', long = "filters", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Property to order the results by
    #[arg(long = "order-by")]
    pub order_by: Option<String>,

    /// Maximum number of results
    #[arg(short = 'M', long = "max-results")]
    pub max_results: Option<u32>,

    /// Level of detail of the response objects
    #[arg(short = 'D', long, default_value_t = api::DEFAULT_DEPTH)]
    pub depth: u32,
}

impl ListArgs {
    /// Build the list query, validating filter expressions
    pub fn to_query(&self) -> Result<ListQuery> {
        Ok(ListQuery {
            depth: self.depth,
            filters: ListQuery::parse_filters(&self.filters)?,
            order_by: self.order_by.clone(),
            max_results: self.max_results,
        })
    }
}

/// Datacenter scope flags
#[derive(Args, Debug, Clone)]
pub struct DatacenterArgs {
    /// The unique Data Center Id
    #[arg(long = "datacenter-id")]
    pub datacenter_id: String,
}

impl From<&DatacenterArgs> for DatacenterScope {
    fn from(args: &DatacenterArgs) -> Self {
        DatacenterScope {
            datacenter_id: args.datacenter_id.clone(),
        }
    }
}

/// Server scope flags
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// The unique Data Center Id
    #[arg(long = "datacenter-id")]
    pub datacenter_id: String,

    /// The unique Server Id
    #[arg(long = "server-id")]
    pub server_id: String,
}

impl From<&ServerArgs> for ServerScope {
    fn from(args: &ServerArgs) -> Self {
        ServerScope {
            datacenter_id: args.datacenter_id.clone(),
            server_id: args.server_id.clone(),
        }
    }
}

/// NIC scope flags
#[derive(Args, Debug, Clone)]
pub struct NicArgs {
    /// The unique Data Center Id
    #[arg(long = "datacenter-id")]
    pub datacenter_id: String,

    /// The unique Server Id
    #[arg(long = "server-id")]
    pub server_id: String,

    /// The unique NIC Id
    #[arg(long = "nic-id")]
    pub nic_id: String,
}

impl From<&NicArgs> for NicScope {
    fn from(args: &NicArgs) -> Self {
        NicScope {
            datacenter_id: args.datacenter_id.clone(),
            server_id: args.server_id.clone(),
            nic_id: args.nic_id.clone(),
        }
    }
}
