//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve logging and display settings from environment variables.
//! - Fall back to build-mode defaults when variables are unset or blank.
//!
//! # Invariants
//! - Resolution never panics; invalid values surface as `ConfigError`.
//! - `log_level` is always one of `trace|debug|info|warn|error`.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "USERBOOK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "USERBOOK_LOG_DIR";
pub const ENV_CURRENCY: &str = "USERBOOK_CURRENCY";

const DEFAULT_LOG_DIR_NAME: &str = "userbook-logs";
const DEFAULT_CURRENCY_LABEL: &str = "Rs";

/// Configuration resolution error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by FFI and CLI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Prefix for money labels in the list view.
    pub currency_label: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, ignoring blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|message| {
                ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    message,
                }
            })?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    message: format!("must be an absolute path, got `{dir}`"),
                });
            }
            config.log_dir = path;
        }

        if let Some(currency) = read(ENV_CURRENCY) {
            config.currency_label = currency;
        }

        Ok(config)
    }

    /// Log directory as UTF-8 text for `init_logging`.
    pub fn log_dir_str(&self) -> Option<&str> {
        self.log_dir.to_str()
    }
}
