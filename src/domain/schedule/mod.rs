//! Schedule read model - day/time-slot projection of session lists.

mod projector;

pub use projector::{project, DayTab, ScheduleView, TimeSlot};
