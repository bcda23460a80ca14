//! Attendee aggregate - a registered profile bound to an authenticated identity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Principal, SessionId, ValidationError};

/// A registered attendee profile.
///
/// Bound one-to-one with an authenticated principal; the backing store
/// enforces at most one attendee per principal. The only mutable part after
/// registration is the agenda: the set of session identifiers the attendee
/// has selected. Both add and remove are idempotent set operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    principal: Principal,
    first_name: String,
    last_name: String,
    email_address: String,
    #[serde(default)]
    sessions: BTreeSet<SessionId>,
}

impl Attendee {
    /// Creates a new attendee profile with an empty agenda.
    pub fn new(
        principal: Principal,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email_address = email_address.into();

        if first_name.trim().is_empty() {
            return Err(ValidationError::empty_field("first_name"));
        }
        if last_name.trim().is_empty() {
            return Err(ValidationError::empty_field("last_name"));
        }
        if !email_address.contains('@') {
            return Err(ValidationError::invalid_format(
                "email_address",
                "missing @ symbol",
            ));
        }

        Ok(Self {
            principal,
            first_name,
            last_name,
            email_address,
            sessions: BTreeSet::new(),
        })
    }

    /// The principal this profile is bound to.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// The agenda: session identifiers this attendee has selected.
    pub fn sessions(&self) -> &BTreeSet<SessionId> {
        &self.sessions
    }

    /// Returns true if the given session is on this attendee's agenda.
    pub fn has_session(&self, session_id: &SessionId) -> bool {
        self.sessions.contains(session_id)
    }

    /// Adds a session to the agenda. Returns false if it was already present.
    pub fn add_session(&mut self, session_id: SessionId) -> bool {
        self.sessions.insert(session_id)
    }

    /// Removes a session from the agenda. Returns false if it was not present.
    pub fn remove_session(&mut self, session_id: &SessionId) -> bool {
        self.sessions.remove(session_id)
    }
}
