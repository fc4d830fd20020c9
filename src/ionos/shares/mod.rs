//! Resources shared with a group

mod api;
mod commands;
mod models;

pub use api::ShareSet;
pub use commands::run_share_command;
pub use models::{Share, ShareProperties};
