//! Load balancers of a datacenter

mod api;
mod commands;
mod models;

pub use api::LoadbalancerSet;
pub use commands::run_loadbalancer_command;
pub use models::{Loadbalancer, LoadbalancerProperties};
