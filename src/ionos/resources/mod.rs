//! Read-only view of the resources available to the account

mod api;
mod commands;
mod models;

pub use api::ResourceFilter;
pub use commands::run_resource_command;
pub use models::{Resource, ResourceProperties};
