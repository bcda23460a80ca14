//! Attendee HTTP adapter - registration and current-profile endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AttendeeHandlers;
pub use routes::attendee_routes;
