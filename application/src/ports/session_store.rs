//! Session store port.
//!
//! Keyed storage for in-flight interview sessions. The default adapter is an
//! in-memory map; the port exists so tests can inject their own backing and
//! a deployment could swap in a durable store.

use acumen_domain::InterviewSession;
use async_trait::async_trait;

/// Keyed store of active interview sessions.
///
/// One session is processed strictly sequentially, so the orchestrator works
/// on a clone and writes it back with `put` — implementations only need
/// whole-record get/put semantics, not intra-record locking.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert or replace a session under its own id.
    async fn put(&self, session: InterviewSession);

    /// Fetch a clone of a session, or `None` for unknown ids.
    async fn get(&self, session_id: &str) -> Option<InterviewSession>;

    /// Evict a session. Returns whether anything was removed; removing an
    /// absent id is a no-op, so eviction is idempotent.
    async fn remove(&self, session_id: &str) -> bool;

    /// Number of active sessions.
    async fn active_count(&self) -> usize;
}
