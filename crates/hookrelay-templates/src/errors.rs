use std::path::PathBuf;

use thiserror::Error;

/// Template error.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Unknown template '{key}'")]
    UnknownTemplate { key: String },

    #[error("Could not read template file '{}'", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid template '{key}'")]
    InvalidTemplate {
        key: String,
        source: Box<handlebars::TemplateError>,
    },

    #[error("Could not render template '{key}'")]
    RenderError {
        key: String,
        source: handlebars::RenderError,
    },
}

pub type Result<T, E = TemplateError> = core::result::Result<T, E>;
