//! Token-introspection identity resolver.
//!
//! Production implementation of the `IdentityResolver` port: presents the
//! bearer credential to the identity provider's introspection endpoint
//! (RFC 7662 shape) and maps the answer to a principal. The provider owns
//! the credential format; this adapter only needs `active` and `sub`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::IdentityConfig;
use crate::domain::foundation::{IdentityError, Principal};
use crate::ports::IdentityResolver;

/// Introspection response; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    active: bool,
    #[serde(default)]
    sub: Option<String>,
}

/// Identity resolver backed by a remote introspection endpoint.
pub struct IntrospectionResolver {
    endpoint: String,
    http: reqwest::Client,
}

impl IntrospectionResolver {
    /// Creates a resolver from configuration.
    pub fn new(config: &IdentityConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            endpoint: config.introspection_url.clone(),
            http,
        })
    }
}

#[async_trait]
impl IdentityResolver for IntrospectionResolver {
    async fn resolve(&self, credential: &str) -> Result<Principal, IdentityError> {
        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("token", credential)])
            .send()
            .await
            .map_err(|e| IdentityError::service_unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityError::service_unavailable(format!(
                "introspection endpoint answered {}",
                response.status()
            )));
        }

        let introspection = response
            .json::<IntrospectionResponse>()
            .await
            .map_err(|e| IdentityError::service_unavailable(e.to_string()))?;

        match introspection {
            IntrospectionResponse {
                active: true,
                sub: Some(sub),
            } => Principal::new(sub).map_err(|_| IdentityError::InvalidCredential),
            _ => Err(IdentityError::InvalidCredential),
        }
    }
}
