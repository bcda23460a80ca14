//! In-memory backing-store adapter for development and testing.
//!
//! Implements the `BackendStore` port without a network, mirroring the
//! remote store's contract: conditional create under a single write lock,
//! idempotent association removal, catalog order preserved.
//!
//! # Example
//!
//! ```ignore
//! use summit::adapters::backend::InMemoryBackend;
//!
//! let store = InMemoryBackend::new()
//!     .with_session(keynote)
//!     .with_attendee(alice);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::attendee::Attendee;
use crate::domain::catalog::Session;
use crate::domain::foundation::{Principal, SessionId};
use crate::ports::{BackendStore, StoreError};

/// In-memory implementation of the `BackendStore` port.
#[derive(Default)]
pub struct InMemoryBackend {
    /// Attendee records keyed by principal (case-sensitive).
    attendees: RwLock<HashMap<String, Attendee>>,
    /// Session catalog in catalog order.
    sessions: RwLock<Vec<Session>>,
    /// Optional error returned by every operation (for failure testing).
    force_error: RwLock<Option<StoreError>>,
    /// Add-association writes that reached this store.
    association_writes: AtomicUsize,
    /// Attendee reads that reached this store.
    attendee_lookups: AtomicUsize,
}

impl InMemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a catalog session, appended in catalog order.
    pub fn with_session(self, session: Session) -> Self {
        self.sessions.write().unwrap().push(session);
        self
    }

    /// Seeds a registered attendee.
    pub fn with_attendee(self, attendee: Attendee) -> Self {
        self.attendees
            .write()
            .unwrap()
            .insert(attendee.principal().as_str().to_string(), attendee);
        self
    }

    /// Forces every operation to fail with the given error.
    pub fn with_error(self, error: StoreError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Number of registered attendees.
    pub fn attendee_count(&self) -> usize {
        self.attendees.read().unwrap().len()
    }

    /// Number of add-association writes that reached this store.
    ///
    /// Lets tests observe whether an idempotent add short-circuited before
    /// the store.
    pub fn association_writes(&self) -> usize {
        self.association_writes.load(Ordering::SeqCst)
    }

    /// Number of attendee reads that reached this store.
    ///
    /// Lets tests observe whether a gate-exempt route skipped the
    /// directory entirely.
    pub fn attendee_lookups(&self) -> usize {
        self.attendee_lookups.load(Ordering::SeqCst)
    }

    fn check_error(&self) -> Result<(), StoreError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BackendStore for InMemoryBackend {
    async fn get_attendee(&self, principal: &Principal) -> Result<Option<Attendee>, StoreError> {
        self.check_error()?;
        self.attendee_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .attendees
            .read()
            .unwrap()
            .get(principal.as_str())
            .cloned())
    }

    async fn create_attendee(&self, attendee: &Attendee) -> Result<Attendee, StoreError> {
        self.check_error()?;
        // Duplicate check and insert happen under one write lock; a racing
        // create for the same principal cannot slip between them.
        let mut attendees = self.attendees.write().unwrap();
        if attendees.contains_key(attendee.principal().as_str()) {
            return Err(StoreError::AlreadyExists);
        }
        attendees.insert(attendee.principal().as_str().to_string(), attendee.clone());
        Ok(attendee.clone())
    }

    async fn get_all_sessions(&self) -> Result<Vec<Session>, StoreError> {
        self.check_error()?;
        Ok(self.sessions.read().unwrap().clone())
    }

    async fn add_session_association(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), StoreError> {
        self.check_error()?;
        self.association_writes.fetch_add(1, Ordering::SeqCst);
        let mut attendees = self.attendees.write().unwrap();
        let attendee = attendees
            .get_mut(principal.as_str())
            .ok_or(StoreError::AttendeeNotFound)?;
        attendee.add_session(session_id.clone());
        Ok(())
    }

    async fn remove_session_association(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), StoreError> {
        self.check_error()?;
        // Removing an absent association (or from an absent attendee) is a
        // successful no-op.
        if let Some(attendee) = self.attendees.write().unwrap().get_mut(principal.as_str()) {
            attendee.remove_session(session_id);
        }
        Ok(())
    }
}
