//! Schedule HTTP adapter - session and agenda views plus agenda edits.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AgendaHandlers, ScheduleState};
pub use routes::schedule_routes;
