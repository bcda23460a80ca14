//! AgendaStore - session-to-attendee associations and the agenda join.

use std::sync::Arc;

use crate::domain::catalog::Session;
use crate::domain::foundation::{DomainError, ErrorCode, Principal, SessionId};
use crate::ports::BackendStore;

/// Idempotent add/remove of agenda associations plus the read-side join
/// producing "sessions this attendee selected".
pub struct AgendaStore {
    store: Arc<dyn BackendStore>,
}

impl AgendaStore {
    pub fn new(store: Arc<dyn BackendStore>) -> Self {
        Self { store }
    }

    /// Adds a session to the attendee's agenda.
    ///
    /// Idempotent: adding an identifier already on the agenda succeeds
    /// without touching the store again. An unregistered principal is a
    /// logic error upstream (agenda edited before registration) and is
    /// reported as `AttendeeNotFound`.
    pub async fn add_session(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), DomainError> {
        let attendee = self.store.get_attendee(principal).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::AttendeeNotFound,
                format!("No attendee registered for '{}'", principal),
            )
        })?;

        if attendee.has_session(session_id) {
            tracing::debug!(principal = %principal, session = %session_id, "session already on agenda");
            return Ok(());
        }

        self.store
            .add_session_association(principal, session_id)
            .await?;
        tracing::info!(principal = %principal, session = %session_id, "session added to agenda");
        Ok(())
    }

    /// Removes a session from the attendee's agenda.
    ///
    /// Idempotent: removing an identifier that is not on the agenda
    /// succeeds with no change; absence of the association is never an
    /// error.
    pub async fn remove_session(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), DomainError> {
        self.store
            .remove_session_association(principal, session_id)
            .await?;
        tracing::info!(principal = %principal, session = %session_id, "session removed from agenda");
        Ok(())
    }

    /// Sessions the attendee has selected, in catalog order.
    ///
    /// An unregistered principal yields an empty list, never an error.
    ///
    /// Fetches the whole catalog and the attendee concurrently, then
    /// filters in memory. A dedicated store query returning only the
    /// selected sessions would avoid shipping the full catalog on every
    /// read; until the store grows one, this join stays.
    pub async fn sessions_for_attendee(
        &self,
        principal: &Principal,
    ) -> Result<Vec<Session>, DomainError> {
        let (catalog, attendee) = futures::try_join!(
            self.store.get_all_sessions(),
            self.store.get_attendee(principal),
        )?;

        let attendee = match attendee {
            Some(attendee) => attendee,
            None => return Ok(Vec::new()),
        };

        Ok(catalog
            .into_iter()
            .filter(|session| attendee.has_session(&session.id))
            .collect())
    }
}
