//! SessionSource implementations backing the two schedule views.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::AgendaStore;
use crate::domain::catalog::Session;
use crate::domain::foundation::{DomainError, Principal};
use crate::ports::{BackendStore, SessionSource};

/// Default source: the full session catalog, identity ignored.
pub struct CatalogSessionSource {
    store: Arc<dyn BackendStore>,
}

impl CatalogSessionSource {
    pub fn new(store: Arc<dyn BackendStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionSource for CatalogSessionSource {
    async fn sessions(&self, _principal: Option<&Principal>) -> Result<Vec<Session>, DomainError> {
        Ok(self.store.get_all_sessions().await?)
    }
}

/// Identity-bound source: the sessions the attendee has selected.
///
/// Anonymous callers (and unregistered principals) get an empty agenda.
pub struct AgendaSessionSource {
    agenda: Arc<AgendaStore>,
}

impl AgendaSessionSource {
    pub fn new(agenda: Arc<AgendaStore>) -> Self {
        Self { agenda }
    }
}

#[async_trait]
impl SessionSource for AgendaSessionSource {
    async fn sessions(&self, principal: Option<&Principal>) -> Result<Vec<Session>, DomainError> {
        match principal {
            Some(principal) => self.agenda.sessions_for_attendee(principal).await,
            None => Ok(Vec::new()),
        }
    }
}
