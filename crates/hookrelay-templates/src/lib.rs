//! Message templates.

mod errors;
mod handlebars_service;
mod interface;

pub use errors::{Result, TemplateError};
pub use handlebars_service::HandlebarsTemplateService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockTemplateService;
pub use interface::TemplateService;
