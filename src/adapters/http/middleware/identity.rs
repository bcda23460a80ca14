//! Identity middleware and extractors for axum.
//!
//! This module provides:
//! - `identity_middleware` - Layer that resolves Bearer credentials and injects the principal into extensions
//! - `RequireIdentity` - Extractor that requires an identified request
//! - `OptionalIdentity` - Extractor for optional identity
//!
//! # Architecture
//!
//! The middleware uses the `IdentityResolver` port, keeping it
//! provider-agnostic. Whether credentials are resolved by token
//! introspection or a mock for testing, the middleware doesn't change.
//!
//! ```text
//! Request → identity_middleware → injects Principal into extensions
//!                                      ↓
//!                              access gate / handlers read from extensions
//! ```
//!
//! A request without an Authorization header stays anonymous and continues
//! down the chain; whether anonymous access is acceptable is decided by the
//! gate and the handlers, not here.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{IdentityError, Principal};
use crate::ports::IdentityResolver;

/// Identity middleware state - wraps the resolver.
pub type IdentityState = Arc<dyn IdentityResolver>;

/// Identity middleware that resolves Bearer credentials.
///
/// This middleware:
/// 1. Extracts the Bearer credential from the Authorization header
/// 2. Resolves it using the `IdentityResolver` port
/// 3. On success, injects the `Principal` into request extensions
/// 4. On missing credential, continues anonymously
/// 5. On an unresolvable credential, returns 401 Unauthorized
pub async fn identity_middleware(
    State(resolver): State<IdentityState>,
    mut request: Request,
    next: Next,
) -> Response {
    let credential = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match credential {
        Some(credential) => match resolver.resolve(credential).await {
            Ok(principal) => {
                request.extensions_mut().insert(principal);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    IdentityError::InvalidCredential => {
                        (StatusCode::UNAUTHORIZED, "Invalid credential")
                    }
                    IdentityError::ServiceUnavailable(msg) => {
                        tracing::error!("Identity service unavailable: {}", msg);
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Identity service unavailable",
                        )
                    }
                };

                (
                    status,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "IDENTITY_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        None => {
            // No credential provided - the request proceeds anonymously.
            next.run(request).await
        }
    }
}

/// Extractor that requires an identified request.
///
/// Use this extractor in handlers that require a principal. If no principal
/// is in the request extensions (i.e., the identity middleware saw no
/// credential), returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireIdentity(pub Principal);

impl<S> axum::extract::FromRequestParts<S> for RequireIdentity
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

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
                .get::<Principal>()
                .cloned()
                .map(RequireIdentity)
                .ok_or(IdentityRejection::Anonymous)
        })
    }
}

/// Extractor for optional identity.
///
/// Returns `None` for anonymous requests, `Some(principal)` for identified
/// ones.
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Principal>);

impl<S> axum::extract::FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

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
            let principal = parts.extensions.get::<Principal>().cloned();
            Ok(OptionalIdentity(principal))
        })
    }
}

/// Rejection type for identity failures.
#[derive(Debug, Clone)]
pub enum IdentityRejection {
    /// The request carried no resolvable identity.
    Anonymous,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            IdentityRejection::Anonymous => (StatusCode::UNAUTHORIZED, "Identity required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "ANONYMOUS"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::identity::MockIdentityResolver;

    fn alice() -> Principal {
        Principal::new("alice").unwrap()
    }

    #[tokio::test]
    async fn resolver_returns_principal_for_valid_credential() {
        let resolver: Arc<dyn IdentityResolver> =
            Arc::new(MockIdentityResolver::new().with_principal("valid-token", alice()));

        let result = resolver.resolve("valid-token").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[tokio::test]
    async fn require_identity_extracts_principal_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(alice());

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireIdentity, IdentityRejection> =
            RequireIdentity::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        let RequireIdentity(principal) = result.unwrap();
        assert_eq!(principal.as_str(), "alice");
    }

    #[tokio::test]
    async fn require_identity_fails_for_anonymous_requests() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireIdentity, IdentityRejection> =
            RequireIdentity::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(IdentityRejection::Anonymous)));
    }

    #[tokio::test]
    async fn optional_identity_returns_some_when_present() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(alice());

        let (mut parts, _body) = request.into_parts();

        let result: Result<OptionalIdentity, std::convert::Infallible> =
            OptionalIdentity::from_request_parts(&mut parts, &()).await;

        let OptionalIdentity(principal) = result.unwrap();
        assert_eq!(principal.map(|p| p.as_str().to_string()), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn optional_identity_returns_none_when_absent() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<OptionalIdentity, std::convert::Infallible> =
            OptionalIdentity::from_request_parts(&mut parts, &()).await;

        let OptionalIdentity(principal) = result.unwrap();
        assert!(principal.is_none());
    }

    #[test]
    fn identity_rejection_returns_401() {
        let rejection = IdentityRejection::Anonymous;
        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_credential_extraction() {
        let header_value = "Bearer my-secret-token";
        assert_eq!(header_value.strip_prefix("Bearer "), Some("my-secret-token"));

        let header_value = "my-secret-token";
        assert_eq!(header_value.strip_prefix("Bearer "), None);

        let header_value = "Basic dXNlcjpwYXNz";
        assert_eq!(header_value.strip_prefix("Bearer "), None);
    }

    #[test]
    fn identity_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IdentityState>();
    }
}
