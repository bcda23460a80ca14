//! SessionSource port - the capability behind every schedule view.
//!
//! Both schedule pages render the same way; they differ only in where their
//! session list comes from. The full-schedule view uses a source that
//! returns the whole catalog, the personal-agenda view uses one that
//! returns the attendee's selected sessions. One parametrized handler, two
//! sources, no inheritance.

use async_trait::async_trait;

use crate::domain::catalog::Session;
use crate::domain::foundation::{DomainError, Principal};

/// Produces the session list for the current identity.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Sessions to render, in catalog order.
    ///
    /// The principal is optional: a source that does not depend on identity
    /// ignores it, an identity-bound source yields an empty list for an
    /// anonymous or unregistered caller.
    async fn sessions(&self, principal: Option<&Principal>) -> Result<Vec<Session>, DomainError>;
}
