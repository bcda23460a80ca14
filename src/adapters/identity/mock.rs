//! Mock identity resolver for testing.
//!
//! Avoids the need for a real identity provider: credentials map directly
//! to principals, unknown credentials are invalid.
//!
//! # Example
//!
//! ```ignore
//! use summit::adapters::identity::MockIdentityResolver;
//! use summit::domain::foundation::Principal;
//!
//! let resolver = MockIdentityResolver::new()
//!     .with_principal("alice-token", Principal::new("alice").unwrap());
//!
//! let principal = resolver.resolve("alice-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{IdentityError, Principal};
use crate::ports::IdentityResolver;

/// Mock resolver mapping credentials to principals.
#[derive(Debug, Default)]
pub struct MockIdentityResolver {
    /// Map of valid credentials to their principals.
    credentials: RwLock<HashMap<String, Principal>>,
    /// Optional error to return for all resolutions (for error testing).
    force_error: RwLock<Option<IdentityError>>,
}

impl MockIdentityResolver {
    /// Creates a new empty mock resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid credential that resolves to a principal.
    pub fn with_principal(self, credential: impl Into<String>, principal: Principal) -> Self {
        self.credentials
            .write()
            .unwrap()
            .insert(credential.into(), principal);
        self
    }

    /// Adds a credential `{name}-token` resolving to principal `{name}`.
    pub fn with_test_principal(self, name: &str) -> Self {
        let principal = Principal::new(name).expect("test principal must be non-empty");
        self.with_principal(format!("{}-token", name), principal)
    }

    /// Forces all resolutions to return the specified error.
    pub fn with_error(self, error: IdentityError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a new valid credential at runtime.
    pub fn add_credential(&self, credential: impl Into<String>, principal: Principal) {
        self.credentials
            .write()
            .unwrap()
            .insert(credential.into(), principal);
    }

    /// Removes a credential, making it invalid.
    pub fn remove_credential(&self, credential: &str) {
        self.credentials.write().unwrap().remove(credential);
    }
}

#[async_trait]
impl IdentityResolver for MockIdentityResolver {
    async fn resolve(&self, credential: &str) -> Result<Principal, IdentityError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.credentials
            .read()
            .unwrap()
            .get(credential)
            .cloned()
            .ok_or(IdentityError::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_registered_credential() {
        let resolver = MockIdentityResolver::new()
            .with_principal("alice-token", Principal::new("alice").unwrap());

        let principal = resolver.resolve("alice-token").await.unwrap();

        assert_eq!(principal.as_str(), "alice");
    }

    #[tokio::test]
    async fn unknown_credential_is_invalid() {
        let resolver = MockIdentityResolver::new();

        let result = resolver.resolve("unknown").await;

        assert!(matches!(result, Err(IdentityError::InvalidCredential)));
    }

    #[tokio::test]
    async fn with_test_principal_wires_token_convention() {
        let resolver = MockIdentityResolver::new().with_test_principal("bob");

        let principal = resolver.resolve("bob-token").await.unwrap();

        assert_eq!(principal.as_str(), "bob");
    }

    #[tokio::test]
    async fn forced_error_overrides_resolution() {
        let resolver = MockIdentityResolver::new()
            .with_test_principal("alice")
            .with_error(IdentityError::service_unavailable("down"));

        let result = resolver.resolve("alice-token").await;

        assert!(matches!(result, Err(IdentityError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn credentials_can_be_added_and_removed_at_runtime() {
        let resolver = MockIdentityResolver::new();

        resolver.add_credential("temp", Principal::new("carol").unwrap());
        assert!(resolver.resolve("temp").await.is_ok());

        resolver.remove_credential("temp");
        assert!(resolver.resolve("temp").await.is_err());
    }
}
