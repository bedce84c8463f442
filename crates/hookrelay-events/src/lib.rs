//! Gogs webhook events.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod event;
mod event_type;
pub mod types;

#[cfg(any(test, feature = "testkit"))]
pub mod fixtures;

pub use errors::{EventError, EventTypeError, Result};
pub use event::{GogsEvent, GogsWebhook};
pub use event_type::GogsEventType;
