//! In-memory session store.
//!
//! Default [`SessionStore`] adapter: a `tokio::sync::RwLock` over a plain
//! map. Sessions live only as long as the process; there is no durability
//! across restarts.

use acumen_application::ports::session_store::SessionStore;
use acumen_domain::InterviewSession;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, InterviewSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session: InterviewSession) {
        self.sessions
            .write()
            .await
            .insert(session.id().to_string(), session);
    }

    async fn get(&self, session_id: &str) -> Option<InterviewSession> {
        self.sessions.read().await.get(session_id).cloned()
    }

    async fn remove(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = InMemorySessionStore::new();
        let session = InterviewSession::new("s1", "Jane Doe", None);
        store.put(session).await;

        let fetched = store.get("s1").await.unwrap();
        assert_eq!(fetched.candidate_name(), "Jane Doe");
        assert!(store.get("s2").await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_existing() {
        let store = InMemorySessionStore::new();
        store.put(InterviewSession::new("s1", "Jane Doe", None)).await;

        let mut session = store.get("s1").await.unwrap();
        session.set_experience_level("advanced");
        store.put(session).await;

        let fetched = store.get("s1").await.unwrap();
        assert_eq!(fetched.experience_level(), Some("advanced"));
        assert_eq!(store.active_count().await, 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.put(InterviewSession::new("s1", "Jane Doe", None)).await;

        assert!(store.remove("s1").await);
        assert!(!store.remove("s1").await);
        assert!(!store.remove("never").await);
        assert_eq!(store.active_count().await, 0);
    }
}
