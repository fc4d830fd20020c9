//! Groups, their privileges and members

mod api;
mod commands;
mod models;

pub use api::GroupSet;
pub use commands::run_group_command;
pub use models::{Group, GroupProperties};
