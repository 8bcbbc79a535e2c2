use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::form::GenerateRequest;
use crate::roster::RosterTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterState {
    NoTable,
    TableReady,
}

/// Everything one browser session keeps between requests
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    /// Inputs of the last Generate attempt, or the configured defaults
    pub form: GenerateRequest,
    pub table: Option<RosterTable>,
    /// Message of the last failed Generate, cleared on success
    pub error: Option<String>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new(id: Uuid, form: GenerateRequest) -> Self {
        Self {
            id,
            form,
            table: None,
            error: None,
            last_seen: Utc::now(),
        }
    }

    pub fn state(&self) -> RosterState {
        match self.table {
            Some(_) => RosterState::TableReady,
            None => RosterState::NoTable,
        }
    }
}

/// In-memory session storage keyed by the session cookie
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
    initial_form: GenerateRequest,
}

impl SessionStore {
    pub fn new(ttl: Duration, initial_form: GenerateRequest) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            initial_form,
        }
    }

    /// Return the id of a live session, creating one when `id` is missing,
    /// unknown or expired
    pub async fn resolve(&self, id: Option<Uuid>) -> Uuid {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.ttl);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "Purged idle sessions");
        }

        if let Some(id) = id {
            if let Some(session) = sessions.get_mut(&id) {
                session.last_seen = now;
                return id;
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(id, Session::new(id, self.initial_form.clone()));
        tracing::info!("Created session {}", id);
        id
    }

    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&Session) -> R) -> Option<R> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(f)
    }

    /// Run `f` against the session while holding the write lock
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(ttl: Duration) -> SessionStore {
        SessionStore::new(ttl, GenerateRequest::new(2024, 12))
    }

    #[tokio::test]
    async fn test_resolve_creates_and_reuses() {
        let store = store(Duration::minutes(10));
        let id = store.resolve(None).await;
        assert_eq!(store.resolve(Some(id)).await, id);
        assert_eq!(store.session_count().await, 1);

        let other = store.resolve(Some(Uuid::new_v4())).await;
        assert_ne!(other, id);
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_new_session_has_no_table() {
        let store = store(Duration::minutes(10));
        let id = store.resolve(None).await;
        let (state, form) = store
            .read(id, |s| (s.state(), s.form.clone()))
            .await
            .unwrap();
        assert_eq!(state, RosterState::NoTable);
        assert_eq!(form, GenerateRequest::new(2024, 12));
    }

    #[tokio::test]
    async fn test_expired_sessions_are_purged() {
        let store = store(Duration::minutes(10));
        let id = store.resolve(None).await;
        store
            .update(id, |s| s.last_seen = Utc::now() - Duration::minutes(11))
            .await
            .unwrap();

        let fresh = store.resolve(Some(id)).await;
        assert_ne!(fresh, id);
        assert_eq!(store.session_count().await, 1);
        assert!(store.read(id, |_| ()).await.is_none());
    }
}
