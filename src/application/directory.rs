//! AttendeeDirectory - lookup and registration of attendee profiles.

use std::sync::Arc;

use crate::domain::attendee::Attendee;
use crate::domain::foundation::{DomainError, Principal};
use crate::ports::BackendStore;

/// Lookup/create of attendee profiles keyed by principal.
///
/// Wraps the remote attendee store; holds no state of its own, so every
/// lookup reflects the store's current truth.
pub struct AttendeeDirectory {
    store: Arc<dyn BackendStore>,
}

impl AttendeeDirectory {
    pub fn new(store: Arc<dyn BackendStore>) -> Self {
        Self { store }
    }

    /// Fetches the attendee registered for a principal.
    ///
    /// A normal miss is `Ok(None)`, never an error.
    pub async fn lookup(&self, principal: &Principal) -> Result<Option<Attendee>, DomainError> {
        Ok(self.store.get_attendee(principal).await?)
    }

    /// Registers a new attendee profile.
    ///
    /// The duplicate check and the write are a single logical operation:
    /// the store's conditional create rejects a second registration for the
    /// same principal, so no check-then-write window exists here. A
    /// successful registration is visible to subsequent lookups.
    pub async fn register(&self, attendee: Attendee) -> Result<Attendee, DomainError> {
        let created = self.store.create_attendee(&attendee).await?;
        tracing::info!(principal = %created.principal(), "attendee registered");
        Ok(created)
    }
}
