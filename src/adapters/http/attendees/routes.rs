//! HTTP routes for attendee endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{current_attendee, register, AttendeeHandlers};

/// Creates the attendee router with all endpoints.
pub fn attendee_routes(handlers: AttendeeHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/me", get(current_attendee))
        .with_state(handlers)
}
