//! HTTP handlers for attendee endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::{CurrentAttendee, RequireIdentity};
use crate::application::AttendeeDirectory;
use crate::domain::attendee::Attendee;

use super::dto::{AttendeeResponse, RegisterRequest};

/// Handler state for attendee endpoints.
#[derive(Clone)]
pub struct AttendeeHandlers {
    directory: Arc<AttendeeDirectory>,
}

impl AttendeeHandlers {
    pub fn new(directory: Arc<AttendeeDirectory>) -> Self {
        Self { directory }
    }
}

/// POST /register - Register the current identity as an attendee.
///
/// The route is gate-exempt (it is the registration entry point) but still
/// requires an identity: anonymous callers have nothing to register.
pub async fn register(
    State(handlers): State<AttendeeHandlers>,
    RequireIdentity(principal): RequireIdentity,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let attendee = match Attendee::new(
        principal,
        req.first_name,
        req.last_name,
        req.email_address,
    ) {
        Ok(attendee) => attendee,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("VALIDATION_FAILED", e.to_string())),
            )
                .into_response()
        }
    };

    match handlers.directory.register(attendee).await {
        Ok(created) => {
            let response: AttendeeResponse = created.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /me - Profile of the current, registered attendee.
pub async fn current_attendee(CurrentAttendee(attendee): CurrentAttendee) -> Response {
    let response: AttendeeResponse = attendee.into();
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::backend::InMemoryBackend;
    use crate::domain::foundation::Principal;

    fn handlers() -> AttendeeHandlers {
        AttendeeHandlers::new(Arc::new(AttendeeDirectory::new(Arc::new(
            InMemoryBackend::new(),
        ))))
    }

    fn request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Alice".to_string(),
            last_name: "Anderson".to_string(),
            email_address: "alice@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn register_answers_201_for_a_new_identity() {
        let response = register(
            State(handlers()),
            RequireIdentity(Principal::new("alice").unwrap()),
            Json(request()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn register_answers_409_for_a_duplicate_identity() {
        let handlers = handlers();

        let first = register(
            State(handlers.clone()),
            RequireIdentity(Principal::new("alice").unwrap()),
            Json(request()),
        )
        .await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = register(
            State(handlers),
            RequireIdentity(Principal::new("alice").unwrap()),
            Json(request()),
        )
        .await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn register_answers_400_for_invalid_profile_fields() {
        let mut invalid = request();
        invalid.email_address = "not-an-email".to_string();

        let response = register(
            State(handlers()),
            RequireIdentity(Principal::new("alice").unwrap()),
            Json(invalid),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
