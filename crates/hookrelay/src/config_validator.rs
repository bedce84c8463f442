//! Validation utilities.

use std::{fmt::Write, path::Path};

use hookrelay_config::{ChatDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }

    // Check chat configuration
    if config.chat.driver == ChatDriver::Http {
        if config.chat.http.url.is_empty() {
            _missing(&mut error, "BOT_CHAT_HTTP_URL");
        }
        if config.chat.http.timeout == 0 {
            _invalid(&mut error, "BOT_CHAT_HTTP_TIMEOUT", "must be positive");
        }
    }

    // Check templates configuration
    if !config.templates.directory.is_empty() && !Path::new(&config.templates.directory).is_dir()
    {
        _invalid(&mut error, "BOT_TEMPLATES_DIR", "not a directory");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
