//! HTTP routes for schedule endpoints.
//!
//! `/sessions` and `/agenda` share one handler; they differ only in the
//! `SessionSource` baked into their state.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::AgendaStore;
use crate::ports::SessionSource;

use super::handlers::{
    add_to_agenda, remove_from_agenda, schedule_view, AgendaHandlers, ScheduleState,
};

/// Creates the schedule router with both views and the agenda mutations.
pub fn schedule_routes(
    catalog: Arc<dyn SessionSource>,
    personal: Arc<dyn SessionSource>,
    agenda: Arc<AgendaStore>,
) -> Router {
    let full_schedule = Router::new()
        .route("/sessions", get(schedule_view))
        .with_state(ScheduleState::new(catalog));

    let personal_schedule = Router::new()
        .route("/agenda", get(schedule_view))
        .with_state(ScheduleState::new(personal));

    let agenda_edits = Router::new()
        .route(
            "/agenda/sessions/:session_id",
            post(add_to_agenda).delete(remove_from_agenda),
        )
        .with_state(AgendaHandlers::new(agenda));

    full_schedule.merge(personal_schedule).merge(agenda_edits)
}
