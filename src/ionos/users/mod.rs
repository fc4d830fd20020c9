//! Users of the contract

mod api;
mod commands;
mod models;

pub use api::UserSet;
pub use commands::run_user_command;
pub use models::{User, UserProperties};
