//! Identity types for the domain layer.
//!
//! The identity mechanism itself lives behind the `IdentityResolver` port;
//! the domain only knows that a request carries either no principal or a
//! stable string principal. These errors are domain-centric, not
//! provider-specific.

use thiserror::Error;

/// Errors that can occur while resolving a request's identity.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The presented credential is missing, malformed, or not recognized.
    #[error("Invalid or expired credential")]
    InvalidCredential,

    /// The identity service is unavailable (network, config, etc.).
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IdentityError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, IdentityError::ServiceUnavailable(_))
    }
}
