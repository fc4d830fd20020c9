//! Network interfaces of a server

mod api;
mod commands;
mod models;

pub use api::NicSet;
pub use commands::run_nic_command;
pub use models::{Nic, NicProperties};
