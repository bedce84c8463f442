//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
mod health;
pub mod server;
pub mod utils;
pub mod webhook;

pub use errors::{Result, ServerError, WebhookError};
