//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`hookrelay_templates::TemplateError`].
    #[error("Template error: {source}")]
    TemplateError {
        source: hookrelay_templates::TemplateError,
    },
}

impl From<hookrelay_templates::TemplateError> for DomainError {
    fn from(e: hookrelay_templates::TemplateError) -> Self {
        Self::TemplateError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
