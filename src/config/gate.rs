//! Access gate configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Route metadata for the access gate, fixed at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Where unregistered identities are redirected
    #[serde(default = "default_registration_path")]
    pub registration_path: String,

    /// Paths the gate never enforces on.
    ///
    /// Must include the registration path, sign-in, and sign-out, or an
    /// unregistered identity could never reach the page that lets them
    /// register.
    #[serde(default = "default_exempt_paths")]
    pub exempt_paths: Vec<String>,
}

impl GateConfig {
    /// Validate gate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.registration_path.starts_with('/') {
            return Err(ValidationError::InvalidRegistrationPath(
                self.registration_path.clone(),
            ));
        }
        if !self.exempt_paths.contains(&self.registration_path) {
            return Err(ValidationError::RegistrationPathNotExempt(
                self.registration_path.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            registration_path: default_registration_path(),
            exempt_paths: default_exempt_paths(),
        }
    }
}

fn default_registration_path() -> String {
    "/register".to_string()
}

fn default_exempt_paths() -> Vec<String> {
    vec![
        "/register".to_string(),
        "/signin".to_string(),
        "/signout".to_string(),
        "/health".to_string(),
    ]
}
