//! Events fanned out to namespace subscribers.
//!
//! A [`FeedEvent`] is published on the [`super::EventBus`] by the emit
//! endpoint and forwarded by every WebSocket connection joined to the
//! same namespace.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::Namespace;

/// Event name the listener subscribes to by default.
pub const DEFAULT_EVENT: &str = "emailmsg";

/// A named event with its payload data, addressed to one namespace.
#[derive(Debug, Clone, Serialize)]
pub struct FeedEvent {
    /// Target namespace.
    pub namespace: Namespace,
    /// Event name (e.g. `"emailmsg"`).
    pub event: String,
    /// Payload data; sent to clients as `{"data": ...}`.
    pub data: Value,
    /// Emission timestamp.
    pub timestamp: DateTime<Utc>,
}

impl FeedEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(namespace: Namespace, event: impl Into<String>, data: Value) -> Self {
        Self {
            namespace,
            event: event.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    /// Wire payload, `{"data": <data>}`.
    #[must_use]
    pub fn payload(&self) -> Value {
        serde_json::json!({ "data": self.data })
    }
}
