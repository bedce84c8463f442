//! Chat interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::ChatError;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockChatService;
pub use interface::ChatService;
