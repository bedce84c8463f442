//! Relay logic.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod types;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
pub use types::{DispatchOutcome, RoutingDecision, TemplateKey};
use use_cases::{
    classify_event::ClassifyEvent, dispatch_event::DispatchEvent, preview_event::PreviewEvent,
    resolve_channel::ResolveChannel,
};

module! {
    pub CoreModule {
        components = [
            ClassifyEvent, ResolveChannel, DispatchEvent, PreviewEvent
        ],
        providers = []
    }
}
