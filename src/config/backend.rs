//! Backing-store configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Connection settings for the remote attendee/session store.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the store's HTTP API
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::invalid_url("backend.url", &self.url));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_request_timeout() -> u64 {
    10
}
