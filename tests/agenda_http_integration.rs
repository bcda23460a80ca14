//! Integration tests for agenda selection and the projected schedule views.
//!
//! Catalog fixture: S1 and S2 start 09:00 on day 0, S3 starts 10:00 on
//! day 1. Alice registers, selects S1 and S3, and reads her agenda through
//! the day-filtered views.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use tower::ServiceExt;

use summit::adapters::backend::InMemoryBackend;
use summit::adapters::http::{app_router, AppServices};
use summit::adapters::identity::MockIdentityResolver;
use summit::application::{
    AgendaSessionSource, AgendaStore, AttendeeDirectory, CatalogSessionSource,
};
use summit::config::{GateConfig, ServerConfig};
use summit::domain::attendee::Attendee;
use summit::domain::catalog::Session;
use summit::domain::foundation::{Principal, SessionId};
use summit::ports::{BackendStore, SessionSource};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn session(id: &str, day: u32, hour: u32, minute: u32) -> Session {
    Session {
        id: SessionId::new(id).unwrap(),
        title: format!("Session {}", id),
        track: None,
        start_time: Utc
            .with_ymd_and_hms(2026, 9, 14 + day, hour, minute, 0)
            .unwrap(),
        end_time: Utc
            .with_ymd_and_hms(2026, 9, 14 + day, hour + 1, minute, 0)
            .unwrap(),
        speakers: Vec::new(),
    }
}

fn alice() -> Attendee {
    Attendee::new(
        Principal::new("alice").unwrap(),
        "Alice",
        "Anderson",
        "alice@example.com",
    )
    .unwrap()
}

/// Router over a seeded catalog with `alice` already registered.
fn test_app() -> Router {
    let store: Arc<dyn BackendStore> = Arc::new(
        InMemoryBackend::new()
            .with_session(session("s-1", 0, 9, 0))
            .with_session(session("s-2", 0, 9, 0))
            .with_session(session("s-3", 1, 10, 0))
            .with_attendee(alice()),
    );
    let resolver = Arc::new(MockIdentityResolver::new().with_test_principal("alice"));

    let directory = Arc::new(AttendeeDirectory::new(store.clone()));
    let agenda = Arc::new(AgendaStore::new(store.clone()));
    let catalog: Arc<dyn SessionSource> = Arc::new(CatalogSessionSource::new(store));
    let personal: Arc<dyn SessionSource> = Arc::new(AgendaSessionSource::new(agenda.clone()));

    app_router(
        AppServices {
            resolver,
            directory,
            agenda,
            catalog,
            personal,
        },
        &GateConfig::default(),
        &ServerConfig::default(),
    )
}

fn authed(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, "Bearer alice-token")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn select(app: &Router, session_id: &str) {
    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            &format!("/agenda/sessions/{}", session_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

async fn agenda_sessions(app: &Router) -> Vec<String> {
    let response = app
        .clone()
        .oneshot(authed(Method::GET, "/me"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["sessions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

/// Collects `(starts_at, [session ids])` pairs from a schedule response.
fn slot_summary(body: &serde_json::Value) -> Vec<(String, Vec<String>)> {
    body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| {
            (
                slot["starts_at"].as_str().unwrap().to_string(),
                slot["sessions"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|s| s["id"].as_str().unwrap().to_string())
                    .collect(),
            )
        })
        .collect()
}

// =============================================================================
// Agenda selection
// =============================================================================

#[tokio::test]
async fn selected_sessions_appear_on_the_profile() {
    let app = test_app();

    select(&app, "s-1").await;
    select(&app, "s-3").await;

    assert_eq!(agenda_sessions(&app).await, vec!["s-1", "s-3"]);
}

#[tokio::test]
async fn selecting_twice_leaves_the_agenda_unchanged() {
    let app = test_app();

    select(&app, "s-1").await;
    select(&app, "s-1").await;

    assert_eq!(agenda_sessions(&app).await, vec!["s-1"]);
}

#[tokio::test]
async fn deselecting_a_never_selected_session_succeeds() {
    let app = test_app();
    select(&app, "s-1").await;

    let response = app
        .clone()
        .oneshot(authed(Method::DELETE, "/agenda/sessions/s-2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(agenda_sessions(&app).await, vec!["s-1"]);
}

#[tokio::test]
async fn deselecting_removes_the_session() {
    let app = test_app();
    select(&app, "s-1").await;
    select(&app, "s-3").await;

    let response = app
        .clone()
        .oneshot(authed(Method::DELETE, "/agenda/sessions/s-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(agenda_sessions(&app).await, vec!["s-3"]);
}

// =============================================================================
// Projected views
// =============================================================================

#[tokio::test]
async fn full_schedule_groups_the_whole_catalog() {
    let app = test_app();

    let response = app.oneshot(authed(Method::GET, "/sessions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["selected_day"], serde_json::Value::Null);
    assert_eq!(
        slot_summary(&body),
        vec![
            (
                "09:00".to_string(),
                vec!["s-1".to_string(), "s-2".to_string()]
            ),
            ("10:00".to_string(), vec!["s-3".to_string()]),
        ]
    );
}

#[tokio::test]
async fn agenda_view_filters_by_day() {
    let app = test_app();
    select(&app, "s-1").await;
    select(&app, "s-3").await;

    let day0 = body_json(
        app.clone()
            .oneshot(authed(Method::GET, "/agenda?day=0"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(day0["selected_day"], 0);
    assert_eq!(
        slot_summary(&day0),
        vec![("09:00".to_string(), vec!["s-1".to_string()])]
    );

    let day1 = body_json(
        app.clone()
            .oneshot(authed(Method::GET, "/agenda?day=1"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(day1["selected_day"], 1);
    assert_eq!(
        slot_summary(&day1),
        vec![("10:00".to_string(), vec!["s-3".to_string()])]
    );
}

#[tokio::test]
async fn invalid_day_parameter_degrades_to_all_days() {
    let app = test_app();
    select(&app, "s-1").await;
    select(&app, "s-3").await;

    for uri in ["/agenda?day=99", "/agenda?day=monday", "/agenda"] {
        let body = body_json(app.clone().oneshot(authed(Method::GET, uri)).await.unwrap()).await;
        assert_eq!(body["selected_day"], serde_json::Value::Null, "uri: {}", uri);
        assert_eq!(
            slot_summary(&body),
            vec![
                ("09:00".to_string(), vec!["s-1".to_string()]),
                ("10:00".to_string(), vec!["s-3".to_string()]),
            ],
            "uri: {}",
            uri
        );
    }
}

#[tokio::test]
async fn agenda_day_offsets_are_relative_to_the_agendas_first_day() {
    let app = test_app();
    select(&app, "s-3").await;

    let body = body_json(app.oneshot(authed(Method::GET, "/agenda")).await.unwrap()).await;
    let tabs: Vec<(i64, String)> = body["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tab| {
            (
                tab["offset"].as_i64().unwrap(),
                tab["label"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    // The agenda holds only the Tuesday session, so Tuesday is its day 0.
    assert_eq!(tabs, vec![(0, "Tuesday".to_string())]);
}

#[tokio::test]
async fn anonymous_agenda_view_is_empty_not_an_error() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/agenda").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["slots"].as_array().unwrap().is_empty());
    assert!(body["days"].as_array().unwrap().is_empty());
}
