//! Pure projection of a session list into a day/time-slot schedule view.
//!
//! Takes an ordered session list plus an optional requested day offset and
//! produces the day-selector tabs, the effective day filter, and the
//! sessions grouped into ascending time slots. Performs no I/O; safe to
//! call synchronously from any handler.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveTime, Timelike};

use crate::domain::catalog::Session;

/// One entry in the day-selector: a day offset and its weekday label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTab {
    /// Calendar days since the conference's first day.
    pub offset: i64,
    /// Weekday name of that day, e.g. "Monday".
    pub label: String,
}

/// Sessions starting at the same truncated start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Start time truncated to minute precision.
    pub starts_at: NaiveTime,
    /// Sessions starting at this slot, in catalog order.
    pub sessions: Vec<Session>,
}

/// The projected schedule: day tabs, effective filter, and time slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    /// Distinct day offsets present in the input, ascending, with labels.
    pub days: Vec<DayTab>,
    /// The day filter in effect; `None` means all days are shown.
    pub selected_day: Option<i64>,
    /// Time slots ascending by start time.
    pub slots: Vec<TimeSlot>,
}

impl ScheduleView {
    fn empty() -> Self {
        Self {
            days: Vec::new(),
            selected_day: None,
            slots: Vec::new(),
        }
    }
}

/// Projects a session list into a [`ScheduleView`].
///
/// A requested day that does not match any available offset (or no request
/// at all) degrades to the unfiltered all-days view; it is never an error.
pub fn project(sessions: &[Session], requested_day: Option<i64>) -> ScheduleView {
    let first_day = match sessions.iter().map(|s| s.start_time.date_naive()).min() {
        Some(day) => day,
        None => return ScheduleView::empty(),
    };

    let day_offset = |session: &Session| -> i64 {
        (session.start_time.date_naive() - first_day).num_days()
    };

    let offsets: BTreeSet<i64> = sessions.iter().map(day_offset).collect();
    let days = offsets
        .iter()
        .map(|&offset| DayTab {
            offset,
            label: (first_day + Duration::days(offset)).format("%A").to_string(),
        })
        .collect();

    let selected_day = requested_day.filter(|offset| offsets.contains(offset));

    let mut slots: BTreeMap<NaiveTime, Vec<Session>> = BTreeMap::new();
    for session in sessions {
        if let Some(selected) = selected_day {
            if day_offset(session) != selected {
                continue;
            }
        }
        slots
            .entry(truncate_to_minute(session.start_time.time()))
            .or_default()
            .push(session.clone());
    }

    ScheduleView {
        days,
        selected_day,
        slots: slots
            .into_iter()
            .map(|(starts_at, sessions)| TimeSlot { starts_at, sessions })
            .collect(),
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
