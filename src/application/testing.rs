//! Shared fixtures for application-layer tests.

use chrono::{TimeZone, Utc};

use crate::domain::catalog::Session;
use crate::domain::foundation::SessionId;

/// Builds a catalog session on conference day `day` at `hour:minute`.
pub fn session_at(id: &str, day: u32, hour: u32, minute: u32) -> Session {
    Session {
        id: SessionId::new(id).unwrap(),
        title: format!("Session {}", id),
        track: None,
        start_time: Utc
            .with_ymd_and_hms(2026, 9, 14 + day, hour, minute, 0)
            .unwrap(),
        end_time: Utc
            .with_ymd_and_hms(2026, 9, 14 + day, hour + 1, minute, 0)
            .unwrap(),
        speakers: Vec::new(),
    }
}
