//! HTTP DTOs for schedule endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Session, SpeakerRef, TrackRef};
use crate::domain::schedule::{DayTab, ScheduleView, TimeSlot};

/// Query parameters accepted by the schedule views.
///
/// `day` is parsed leniently: anything that is not a known day offset
/// (non-numeric, negative, out of range) selects the all-days view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleQuery {
    pub day: Option<String>,
}

impl ScheduleQuery {
    /// The requested day offset, if the parameter parsed as an integer.
    pub fn requested_day(&self) -> Option<i64> {
        self.day.as_deref().and_then(|raw| raw.parse().ok())
    }
}

/// One day-selector tab.
#[derive(Debug, Clone, Serialize)]
pub struct DayTabDto {
    pub offset: i64,
    pub label: String,
}

impl From<DayTab> for DayTabDto {
    fn from(tab: DayTab) -> Self {
        Self {
            offset: tab.offset,
            label: tab.label,
        }
    }
}

/// A session row inside a time slot.
#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub id: String,
    pub title: String,
    pub track: Option<TrackRef>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub speakers: Vec<SpeakerRef>,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            id: session.id.to_string(),
            title: session.title,
            track: session.track,
            start_time: session.start_time,
            end_time: session.end_time,
            speakers: session.speakers,
        }
    }
}

/// Sessions sharing a truncated start time.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlotDto {
    /// Slot start, formatted `HH:MM`.
    pub starts_at: String,
    pub sessions: Vec<SessionDto>,
}

impl From<TimeSlot> for TimeSlotDto {
    fn from(slot: TimeSlot) -> Self {
        Self {
            starts_at: slot.starts_at.format("%H:%M").to_string(),
            sessions: slot.sessions.into_iter().map(SessionDto::from).collect(),
        }
    }
}

/// The projected schedule answered by both views.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub days: Vec<DayTabDto>,
    pub selected_day: Option<i64>,
    pub slots: Vec<TimeSlotDto>,
}

impl From<ScheduleView> for ScheduleResponse {
    fn from(view: ScheduleView) -> Self {
        Self {
            days: view.days.into_iter().map(DayTabDto::from).collect(),
            selected_day: view.selected_day,
            slots: view.slots.into_iter().map(TimeSlotDto::from).collect(),
        }
    }
}
