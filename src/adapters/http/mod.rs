//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the whole surface. The middleware chain is an
//! explicit ordered list of named stages; nothing is registered
//! implicitly:
//!
//! ```text
//! trace → cors → timeout → identity → access gate → handlers
//! ```

pub mod attendees;
pub mod error;
pub mod middleware;
pub mod schedule;

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::application::{AgendaStore, AttendeeDirectory};
use crate::config::{GateConfig, ServerConfig};
use crate::ports::{IdentityResolver, SessionSource};

use attendees::{attendee_routes, AttendeeHandlers};
use middleware::{
    access_gate_middleware, identity_middleware, GateState, IdentityState, RouteExemptions,
};
use schedule::schedule_routes;

/// Everything the router needs, already wired to its adapters.
pub struct AppServices {
    pub resolver: Arc<dyn IdentityResolver>,
    pub directory: Arc<AttendeeDirectory>,
    pub agenda: Arc<AgendaStore>,
    /// Session source for the full schedule view.
    pub catalog: Arc<dyn SessionSource>,
    /// Session source for the personal agenda view.
    pub personal: Arc<dyn SessionSource>,
}

/// Builds the application router with the full middleware chain.
pub fn app_router(services: AppServices, gate: &GateConfig, server: &ServerConfig) -> Router {
    let gate_state = GateState {
        directory: services.directory.clone(),
        exemptions: Arc::new(RouteExemptions::new(gate.exempt_paths.iter().cloned())),
        registration_path: gate.registration_path.clone(),
    };
    let identity_state: IdentityState = services.resolver;

    Router::new()
        .merge(attendee_routes(AttendeeHandlers::new(
            services.directory.clone(),
        )))
        .merge(schedule_routes(
            services.catalog,
            services.personal,
            services.agenda,
        ))
        .route("/health", get(health))
        // Layers apply bottom-up: the last layer added runs first. Listed
        // here innermost-first so the request order reads top of module.
        .layer(from_fn_with_state(gate_state, access_gate_middleware))
        .layer(from_fn_with_state(identity_state, identity_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /health - liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
