//! Port for structured transcript logging.
//!
//! Records interview lifecycle events (session start, scored answers, phase
//! transitions, completion) to a machine-readable log. This is separate from
//! `tracing`-based operation logs: tracing handles human-readable
//! diagnostics, while this port captures the assessment record itself.

use serde_json::Value;

/// A structured transcript event.
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "session_started", "answer_scored").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is intentionally synchronous and non-fallible so logging can never
/// disrupt an interview in progress — failures are silently dropped by
/// implementations.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when transcript logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
