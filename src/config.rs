//! # Configuration Module
//!
//! Application settings read from the environment (a `.env` file is loaded
//! first by the binary).

use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_DIR: &str = "./data";
pub const STORAGE_DIR_VAR: &str = "GROCERY_STORAGE_DIR";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything but "json" means text
    pub fn from_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Configuration for the grocery list binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the JSON store
    pub storage_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            storage_dir: lookup(STORAGE_DIR_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            log_format: lookup(LOG_FORMAT_VAR)
                .map(|value| LogFormat::from_value(&value))
                .unwrap_or(defaults.log_format),
        }
    }
}
