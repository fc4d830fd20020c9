//! Asynchronous request tracking
//!
//! Every mutation of the Cloud API is executed asynchronously and answered
//! with a `Location` header pointing at a request status resource. This
//! module polls those resources and exposes the `request` commands.

mod api;
mod commands;
mod models;
mod waiter;

pub use commands::run_request_command;
pub use models::{Request, RequestState, RequestStatus};
pub use waiter::{complete_mutation, finish_request, wait_for_request};
