//! S3 keys of a user

mod api;
mod commands;
mod models;

pub use api::S3KeySet;
pub use commands::run_s3key_command;
pub use models::{S3Key, S3KeyProperties};
