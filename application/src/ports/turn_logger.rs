//! Turn logger port
//!
//! Structured, append-only record of what happened during council turns.
//! Distinct from tracing: these events are data (one JSON payload each),
//! meant for later inspection of a conversation's turns.

use serde_json::Value;

/// One structured event within a council turn
#[derive(Debug, Clone)]
pub struct TurnEvent {
    pub event_type: String,
    pub payload: Value,
}

impl TurnEvent {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }
}

/// Sink for turn events; must never fail the turn
pub trait TurnLogger: Send + Sync {
    fn log(&self, event: TurnEvent);
}

/// Logger that drops every event
pub struct NoTurnLogger;

impl TurnLogger for NoTurnLogger {
    fn log(&self, _event: TurnEvent) {}
}
