pub(crate) mod classify_event;
pub(crate) mod dispatch_event;
pub(crate) mod preview_event;
pub(crate) mod resolve_channel;

pub use classify_event::ClassifyEventInterface;
pub use dispatch_event::DispatchEventInterface;
pub use preview_event::{EventPreview, PreviewEventInterface};
pub use resolve_channel::ResolveChannelInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    classify_event::MockClassifyEventInterface, dispatch_event::MockDispatchEventInterface,
    preview_event::MockPreviewEventInterface, resolve_channel::MockResolveChannelInterface,
};
