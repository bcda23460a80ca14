//! Identity provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Connection settings for the identity provider's introspection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Token introspection endpoint URL
    pub introspection_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl IdentityConfig {
    /// Validate identity configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.introspection_url.starts_with("http://")
            && !self.introspection_url.starts_with("https://")
        {
            return Err(ValidationError::invalid_url(
                "identity.introspection_url",
                &self.introspection_url,
            ));
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
