//! Remote backing-store adapter over HTTP/JSON.
//!
//! Implements the `BackendStore` port against the conference data service:
//!
//! - `GET    {base}/attendees/{principal}` - fetch one attendee (404 = absent)
//! - `POST   {base}/attendees` - conditional create (409 = duplicate)
//! - `GET    {base}/sessions` - full catalog in catalog order
//! - `POST   {base}/attendees/{principal}/sessions/{id}` - add association
//! - `DELETE {base}/attendees/{principal}/sessions/{id}` - remove association
//!
//! Duplicate detection lives in the store: the conditional create answers
//! 409 when a record for the principal exists, which keeps registration a
//! single logical operation even with concurrent requests. Any other
//! non-success status is surfaced as `StoreError::Unavailable`; nothing is
//! retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::BackendConfig;
use crate::domain::attendee::Attendee;
use crate::domain::catalog::Session;
use crate::domain::foundation::{Principal, SessionId};
use crate::ports::{BackendStore, StoreError};

/// HTTP client for the remote attendee/session store.
pub struct RemoteBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteBackend {
    /// Creates a client from configuration.
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn attendee_url(&self, principal: &Principal) -> String {
        format!("{}/attendees/{}", self.base_url, principal)
    }

    fn association_url(&self, principal: &Principal, session_id: &SessionId) -> String {
        format!(
            "{}/attendees/{}/sessions/{}",
            self.base_url, principal, session_id
        )
    }

    fn transport_error(err: reqwest::Error) -> StoreError {
        StoreError::unavailable(err.to_string())
    }

    fn status_error(status: StatusCode) -> StoreError {
        StoreError::unavailable(format!("store answered {}", status))
    }
}

#[async_trait]
impl BackendStore for RemoteBackend {
    async fn get_attendee(&self, principal: &Principal) -> Result<Option<Attendee>, StoreError> {
        let response = self
            .http
            .get(self.attendee_url(principal))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let attendee = response
                    .json::<Attendee>()
                    .await
                    .map_err(|e| StoreError::Malformed(e.to_string()))?;
                Ok(Some(attendee))
            }
            status => Err(Self::status_error(status)),
        }
    }

    async fn create_attendee(&self, attendee: &Attendee) -> Result<Attendee, StoreError> {
        let response = self
            .http
            .post(format!("{}/attendees", self.base_url))
            .json(attendee)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::CONFLICT => Err(StoreError::AlreadyExists),
            status if status.is_success() => response
                .json::<Attendee>()
                .await
                .map_err(|e| StoreError::Malformed(e.to_string())),
            status => Err(Self::status_error(status)),
        }
    }

    async fn get_all_sessions(&self) -> Result<Vec<Session>, StoreError> {
        let response = self
            .http
            .get(format!("{}/sessions", self.base_url))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        response
            .json::<Vec<Session>>()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }

    async fn add_session_association(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), StoreError> {
        let response = self
            .http
            .post(self.association_url(principal, session_id))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StoreError::AttendeeNotFound),
            status if status.is_success() => Ok(()),
            status => Err(Self::status_error(status)),
        }
    }

    async fn remove_session_association(
        &self,
        principal: &Principal,
        session_id: &SessionId,
    ) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(self.association_url(principal, session_id))
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            // The store's delete is idempotent; an already-gone association
            // answers 404 and counts as success.
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(Self::status_error(status)),
        }
    }
}
