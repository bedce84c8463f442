//! Config module.

mod drivers;

use std::{collections::HashMap, env, str::FromStr};

pub use drivers::{ChatDriver, DriverError};
use thiserror::Error;

const DEFAULT_BIND_IP: &str = "127.0.0.1";
const DEFAULT_BIND_PORT: u16 = 8008;
const DEFAULT_CHAT_HTTP_TIMEOUT: u64 = 5000;

/// Config error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {source}")]
    InvalidDriver { name: String, source: DriverError },

    #[error("Invalid repository mapping entry '{entry}' in '{name}', expected 'repository=channel'")]
    InvalidRepositoryEntry { name: String, entry: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_ip: DEFAULT_BIND_IP.into(),
            bind_port: DEFAULT_BIND_PORT,
            workers_count: None,
        }
    }
}

/// Gogs webhook listener configuration.
#[derive(Debug, Clone, Default)]
pub struct GogsConfig {
    /// Shared webhook secret. Signature verification is disabled when empty.
    pub webhook_secret: String,
    /// Channel used when a repository has no explicit mapping.
    pub default_channel: String,
    /// Lowercase repository name to channel.
    pub repositories: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct ChatHttpConfig {
    /// Chat webhook URL.
    pub url: String,
    /// Optional bearer token.
    pub token: String,
    /// Request timeout (in milliseconds).
    pub timeout: u64,
}

impl Default for ChatHttpConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout: DEFAULT_CHAT_HTTP_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatConfig {
    /// Chat driver.
    pub driver: ChatDriver,
    /// HTTP driver options.
    pub http: ChatHttpConfig,
}

#[derive(Debug, Clone, Default)]
pub struct TemplatesConfig {
    /// Directory containing `<key>.hbs` overrides.
    pub directory: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server options.
    pub server: ServerConfig,
    /// Gogs options.
    pub gogs: GogsConfig,
    /// Chat options.
    pub chat: ChatConfig,
    /// Templates options.
    pub templates: TemplatesConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gogs: GogsConfig::default(),
            chat: ChatConfig::default(),
            templates: TemplatesConfig::default(),
            logging: LoggingConfig::default(),
            version: "0.0.0".into(),
        }
    }
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", DEFAULT_BIND_IP),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", DEFAULT_BIND_PORT),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
            },
            gogs: GogsConfig {
                webhook_secret: env_to_str("BOT_GOGS_WEBHOOK_SECRET", ""),
                default_channel: env_to_str("BOT_GOGS_DEFAULT_CHANNEL", ""),
                repositories: parse_repository_channels(
                    "BOT_GOGS_REPOSITORIES",
                    &env_to_str("BOT_GOGS_REPOSITORIES", ""),
                )?,
            },
            chat: ChatConfig {
                driver: ChatDriver::from_str(&env_to_str("BOT_CHAT_DRIVER", "null")).map_err(
                    |e| ConfigError::InvalidDriver {
                        name: "BOT_CHAT_DRIVER".into(),
                        source: e,
                    },
                )?,
                http: ChatHttpConfig {
                    url: env_to_str("BOT_CHAT_HTTP_URL", ""),
                    token: env_to_str("BOT_CHAT_HTTP_TOKEN", ""),
                    timeout: env_to_u64("BOT_CHAT_HTTP_TIMEOUT", DEFAULT_CHAT_HTTP_TIMEOUT),
                },
            },
            templates: TemplatesConfig {
                directory: env_to_str("BOT_TEMPLATES_DIR", ""),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    /// Look up the channel configured for an already lowercased repository name.
    pub fn repository_channel(&self, repository_name: &str) -> Option<&str> {
        self.gogs
            .repositories
            .get(repository_name)
            .map(String::as_str)
    }
}

/// Parse a `repo=channel,other=channel` list. Keys are lowercased.
pub fn parse_repository_channels(
    name: &str,
    value: &str,
) -> Result<HashMap<String, String>, ConfigError> {
    let mut mapping = HashMap::new();

    for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.split_once('=') {
            Some((repository, channel)) if !repository.trim().is_empty() => {
                mapping.insert(
                    repository.trim().to_lowercase(),
                    channel.trim().to_string(),
                );
            }
            _ => {
                return Err(ConfigError::InvalidRepositoryEntry {
                    name: name.into(),
                    entry: entry.into(),
                })
            }
        }
    }

    Ok(mapping)
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
