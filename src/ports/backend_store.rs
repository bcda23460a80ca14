//! BackendStore port - remote operations against the attendee/session store.
//!
//! The store owns attendee records and the session catalog; this core only
//! consumes it over this port. Any non-success response from the store is a
//! hard failure for the current request, surfaced as a [`StoreError`] and
//! never suppressed or retried here.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::attendee::Attendee;
use crate::domain::catalog::Session;
use crate::domain::foundation::{DomainError, ErrorCode, Principal, SessionId};

/// Errors surfaced by the backing store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// An attendee already exists for the given principal.
    #[error("An attendee is already registered for this identity")]
    AlreadyExists,

    /// The targeted attendee does not exist.
    #[error("No attendee is registered for this identity")]
    AttendeeNotFound,

    /// The store could not be reached or answered non-success.
    #[error("Backing store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with a payload this core could not decode.
    #[error("Backing store returned malformed data: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Creates an unavailable error with a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match err {
            StoreError::AlreadyExists => ErrorCode::AlreadyRegistered,
            StoreError::AttendeeNotFound => ErrorCode::AttendeeNotFound,
            StoreError::Unavailable(_) | StoreError::Malformed(_) => ErrorCode::BackendUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Remote operations against the attendee/session store.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(None)` from `get_attendee` on a normal miss, never an error
/// - Reject `create_attendee` with `StoreError::AlreadyExists` when a record
///   for the same principal exists, with no window where a concurrent
///   duplicate create succeeds
/// - Make a successful create immediately visible to subsequent gets
/// - Treat `remove_session_association` of an absent association as a
///   successful no-op
#[async_trait]
pub trait BackendStore: Send + Sync {
    /// Fetches the attendee registered for a principal, if any.
    async fn get_attendee(&self, principal: &Principal) -> Result<Option<Attendee>, StoreError>;

    /// Creates an attendee record; at most one per principal.
    async fn create_attendee(&self, attendee: &Attendee) -> Result<Attendee, StoreError>;

    /// Fetches the full session catalog in catalog order.
    async fn get_all_sessions(&self) -> Result<Vec<Session>, StoreError>;

    /// Adds a session to an attendee's agenda set.
    async fn add_session_association(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), StoreError>;

    /// Removes a session from an attendee's agenda set.
    async fn remove_session_association(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), StoreError>;
}
