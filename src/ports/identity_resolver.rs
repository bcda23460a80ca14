//! IdentityResolver port - turns a presented credential into a principal.
//!
//! The authentication protocol is out of scope for this core: whatever the
//! provider (OIDC introspection, a gateway-issued header, a mock for
//! testing), the middleware only sees this port. A request either carries a
//! resolvable credential or it is anonymous.

use async_trait::async_trait;

use crate::domain::foundation::{IdentityError, Principal};

/// Resolves a bearer credential to the stable principal it represents.
///
/// # Contract
///
/// Implementations must:
/// - Return the principal for a recognized, currently-valid credential
/// - Return `IdentityError::InvalidCredential` for anything unrecognized
/// - Return `IdentityError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a credential to its principal.
    async fn resolve(&self, credential: &str) -> Result<Principal, IdentityError>;
}
