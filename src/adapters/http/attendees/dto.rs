//! HTTP DTOs for attendee endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::attendee::Attendee;

/// Request to register the current identity as an attendee.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// Attendee profile for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct AttendeeResponse {
    pub principal: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// Selected session identifiers.
    pub sessions: Vec<String>,
}

impl From<Attendee> for AttendeeResponse {
    fn from(attendee: Attendee) -> Self {
        Self {
            principal: attendee.principal().to_string(),
            first_name: attendee.first_name().to_string(),
            last_name: attendee.last_name().to_string(),
            email_address: attendee.email_address().to_string(),
            sessions: attendee.sessions().iter().map(|s| s.to_string()).collect(),
        }
    }
}
