//! Configuration management for the address book assistant.
//!
//! This module handles loading and validating configuration from environment variables,
//! after loading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Banner printed when the assistant starts.
pub const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";

/// Prompt printed before reading each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Startup banner (default: "Welcome to the assistant bot!")
    pub greeting: String,

    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_GREETING`: Startup banner
    /// - `ASSISTANT_PROMPT`: Prompt shown before each command
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is not an error
        let _ = dotenvy::dotenv();

        let greeting = Self::parse_env_text("ASSISTANT_GREETING", DEFAULT_GREETING)?;
        let prompt = Self::parse_env_text("ASSISTANT_PROMPT", DEFAULT_PROMPT)?;
        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config {
            greeting,
            prompt,
            log_level,
        })
    }

    /// Read a text variable, rejecting blank values.
    fn parse_env_text(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(env::VarError::NotPresent) => Ok(default.to_string()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
        }
    }

    /// Read a log level, accepting the names `tracing` understands.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        let level = Self::parse_env_text(var_name, default)?.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), level),
            });
        }
        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            greeting: DEFAULT_GREETING.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
