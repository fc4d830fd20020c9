//! Flow logs of a server NIC

mod api;
mod commands;
mod models;

pub use api::FlowLogSet;
pub use commands::run_flowlog_command;
pub use models::{FlowLog, FlowLogProperties};
