//! Configuration system for SafeStr.
//!
//! Load scan settings from TOML or YAML to choose the length ceiling, the
//! constraint handler and the status code convention without code changes.
//!
//! # Examples
//!
//! ```
//! use safestr_config::{HandlerKind, SafeStrConfig};
//!
//! let config = SafeStrConfig::from_toml_str(r#"
//!     max_string_length = 1024
//!     handler = "log"
//! "#).unwrap();
//!
//! assert_eq!(config.max_string_length, 1024);
//! assert_eq!(config.handler, HandlerKind::Log);
//!
//! let ctx = config.build_context().unwrap();
//! assert_eq!(ctx.max_str_len(), 1024);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use safestr_config::SafeStrConfig;
//!
//! let config = SafeStrConfig::load("safestr.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::sync::Arc;

use safestr_core::{
    ConstraintHandler, IgnoreHandler, LoggingHandler, ScanContext, StatusCodeStyle, RSIZE_MAX_STR,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main SafeStr configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SafeStrConfig {
    /// Ceiling for any declared maximum length.
    #[serde(default = "default_max_string_length")]
    pub max_string_length: usize,

    /// Where constraint violations go.
    #[serde(default)]
    pub handler: HandlerKind,

    /// Sign convention for numeric status codes.
    #[serde(default)]
    pub status_codes: StatusCodes,
}

fn default_max_string_length() -> usize {
    RSIZE_MAX_STR
}

impl Default for SafeStrConfig {
    fn default() -> Self {
        Self {
            max_string_length: default_max_string_length(),
            handler: HandlerKind::default(),
            status_codes: StatusCodes::default(),
        }
    }
}

impl SafeStrConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the length ceiling.
    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = max;
        self
    }

    /// Sets the handler kind.
    pub fn with_handler(mut self, handler: HandlerKind) -> Self {
        self.handler = handler;
        self
    }

    /// Sets the status code convention.
    pub fn with_status_codes(mut self, status_codes: StatusCodes) -> Self {
        self.status_codes = status_codes;
        self
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_string_length == 0 {
            return Err(ConfigError::Invalid(
                "max_string_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a scan context from this configuration.
    pub fn build_context(&self) -> Result<ScanContext, ConfigError> {
        self.validate()?;
        Ok(ScanContext::with_handler(self.handler.build())
            .with_max_str_len(self.max_string_length)
            .with_status_codes(self.status_codes.into()))
    }
}

/// Constraint handler selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Discard violations.
    #[default]
    Ignore,

    /// Emit violations as `tracing` warnings.
    Log,
}

impl HandlerKind {
    /// Creates the handler this kind names.
    pub fn build(self) -> Arc<dyn ConstraintHandler> {
        match self {
            HandlerKind::Ignore => Arc::new(IgnoreHandler),
            HandlerKind::Log => Arc::new(LoggingHandler),
        }
    }
}

/// Status code sign convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCodes {
    /// `ESNULLP` is 400.
    #[default]
    Positive,

    /// `ESNULLP` is -400.
    Negative,
}

impl From<StatusCodes> for StatusCodeStyle {
    fn from(codes: StatusCodes) -> Self {
        match codes {
            StatusCodes::Positive => StatusCodeStyle::Positive,
            StatusCodes::Negative => StatusCodeStyle::Negative,
        }
    }
}
