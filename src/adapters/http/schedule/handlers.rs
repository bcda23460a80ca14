//! HTTP handlers for schedule endpoints.
//!
//! Both schedule pages are served by the one `schedule_view` handler; the
//! router instantiates it twice with different `SessionSource` states
//! (full catalog for `/sessions`, personal agenda for `/agenda`).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::{OptionalIdentity, RequireIdentity};
use crate::application::AgendaStore;
use crate::domain::foundation::SessionId;
use crate::domain::schedule::project;
use crate::ports::SessionSource;

use super::dto::{ScheduleQuery, ScheduleResponse};

/// State for the parametrized schedule view.
#[derive(Clone)]
pub struct ScheduleState {
    source: Arc<dyn SessionSource>,
}

impl ScheduleState {
    pub fn new(source: Arc<dyn SessionSource>) -> Self {
        Self { source }
    }
}

/// GET /sessions and GET /agenda - Day/time-slot schedule view.
pub async fn schedule_view(
    State(state): State<ScheduleState>,
    OptionalIdentity(principal): OptionalIdentity,
    Query(query): Query<ScheduleQuery>,
) -> Response {
    match state.source.sessions(principal.as_ref()).await {
        Ok(sessions) => {
            let view = project(&sessions, query.requested_day());
            (StatusCode::OK, Json(ScheduleResponse::from(view))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// State for agenda mutation endpoints.
#[derive(Clone)]
pub struct AgendaHandlers {
    agenda: Arc<AgendaStore>,
}

impl AgendaHandlers {
    pub fn new(agenda: Arc<AgendaStore>) -> Self {
        Self { agenda }
    }
}

fn parse_session_id(raw: String) -> Result<SessionId, Response> {
    SessionId::new(raw).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("VALIDATION_FAILED", e.to_string())),
        )
            .into_response()
    })
}

/// POST /agenda/sessions/{id} - Add a session to the caller's agenda.
pub async fn add_to_agenda(
    State(handlers): State<AgendaHandlers>,
    RequireIdentity(principal): RequireIdentity,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.agenda.add_session(&principal, &session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /agenda/sessions/{id} - Remove a session from the caller's agenda.
pub async fn remove_from_agenda(
    State(handlers): State<AgendaHandlers>,
    RequireIdentity(principal): RequireIdentity,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.agenda.remove_session(&principal, &session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
