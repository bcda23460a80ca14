//! Access gate middleware - registration enforcement per request.
//!
//! One named stage in the middleware chain, evaluated fresh on every
//! request with no memory beyond the directory:
//!
//! - Exempt route → allow, without ever consulting the directory
//! - Anonymous → allow
//! - Identified, registered → allow, attendee injected into extensions
//! - Identified, unregistered → redirect to the registration entry point
//!
//! Exemption is resolved from static route metadata before any lookup: the
//! registration page, sign-in and sign-out must stay reachable for a
//! not-yet-registered identity, or the redirect would loop forever. The
//! gate never mutates state; the only way from "unregistered" to
//! "registered" is a successful registration.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::application::AttendeeDirectory;
use crate::domain::attendee::Attendee;
use crate::domain::foundation::Principal;

/// Static route metadata: which paths the gate must not enforce on.
///
/// Built once at startup from configuration and consulted by direct
/// lookup; exact path match, case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct RouteExemptions {
    exempt: HashSet<String>,
}

impl RouteExemptions {
    /// Builds the exemption set from a list of paths.
    pub fn new(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            exempt: paths.into_iter().collect(),
        }
    }

    /// Returns true if the gate must not enforce on this path.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt.contains(path)
    }
}

/// Gate middleware state.
#[derive(Clone)]
pub struct GateState {
    pub directory: Arc<AttendeeDirectory>,
    pub exemptions: Arc<RouteExemptions>,
    /// Where unregistered identities are sent.
    pub registration_path: String,
}

/// Attendee record of the current, registered requester.
///
/// Injected by the gate once the lookup has succeeded, so handlers behind
/// the gate can use the profile without a second directory call.
#[derive(Debug, Clone)]
pub struct CurrentAttendee(pub Attendee);

impl<S> axum::extract::FromRequestParts<S> for CurrentAttendee
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CurrentAttendee>()
                .cloned()
                .ok_or(GateRejection::NotRegistered)
        })
    }
}

/// Rejection type for handlers requiring a registered attendee.
#[derive(Debug, Clone)]
pub enum GateRejection {
    /// No registered attendee accompanies this request.
    NotRegistered,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GateRejection::NotRegistered => (StatusCode::UNAUTHORIZED, "Registration required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "NOT_REGISTERED"
            })),
        )
            .into_response()
    }
}

/// The gate itself.
///
/// Runs after the identity middleware; reads the principal from request
/// extensions and decides allow/redirect as documented on the module.
pub async fn access_gate_middleware(
    State(gate): State<GateState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Route metadata first: an exempt route never triggers a lookup.
    if gate.exemptions.is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    let principal = request.extensions().get::<Principal>().cloned();
    let principal = match principal {
        Some(principal) => principal,
        // Anonymous requests pass; handlers decide what anonymity means.
        None => return next.run(request).await,
    };

    match gate.directory.lookup(&principal).await {
        Ok(Some(attendee)) => {
            request.extensions_mut().insert(CurrentAttendee(attendee));
            next.run(request).await
        }
        Ok(None) => {
            tracing::debug!(
                principal = %principal,
                path = %request.uri().path(),
                "unregistered identity redirected to registration"
            );
            Redirect::to(&gate.registration_path).into_response()
        }
        Err(e) => {
            tracing::error!("attendee lookup failed at the gate: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "error": "Attendee directory unavailable",
                    "code": "BACKEND_UNAVAILABLE"
                })),
            )
                .into_response()
        }
    }
}
