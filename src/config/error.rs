//! Configuration error types.

use thiserror::Error;

/// Errors while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded configuration.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("'{field}' must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: String, value: String },

    #[error("Registration path must start with '/', got '{0}'")]
    InvalidRegistrationPath(String),

    #[error("Registration path '{0}' must be listed in the gate exemptions")]
    RegistrationPathNotExempt(String),
}

impl ValidationError {
    pub fn invalid_url(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidUrl {
            field: field.into(),
            value: value.into(),
        }
    }
}
