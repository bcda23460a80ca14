//! Catalog types - sessions as owned by the external conference catalog.
//!
//! Sessions are read-only from this core's perspective: they are fetched
//! from the backing store and never created or mutated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

/// Reference to the track a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    pub id: String,
    pub name: String,
}

/// Reference to a speaker presenting a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRef {
    pub id: String,
    pub name: String,
}

/// A catalog session (talk/event) with timing and speaker metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub track: Option<TrackRef>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Speakers in billing order, as supplied by the catalog.
    #[serde(default)]
    pub speakers: Vec<SpeakerRef>,
}
