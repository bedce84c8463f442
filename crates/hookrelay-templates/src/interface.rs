use crate::Result;

/// Turns a webhook payload into chat messages.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait TemplateService: Send + Sync {
    /// Render the template registered under `template_key` against the payload.
    ///
    /// Each returned entry is one chat message, in sending order.
    fn render(&self, template_key: &str, payload: &serde_json::Value) -> Result<Vec<String>>;
}
