//! WebSocket message envelope shared by the gateway and the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::FeedEvent;

/// Top-level WebSocket message envelope.
///
/// ```json
/// {
///   "id": "5f0c…",
///   "type": "event",
///   "event": "emailmsg",
///   "timestamp": "2026-10-17T12:00:00Z",
///   "payload": { "data": "hello" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    #[serde(default)]
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// Event name, present on `event` messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// ISO-8601 timestamp.
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client broadcast event.
    Event,
    /// Server → Client error.
    Error,
}

impl WsMessage {
    /// Wraps a [`FeedEvent`] as an `event` envelope with a fresh ID.
    #[must_use]
    pub fn from_event(event: &FeedEvent) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            msg_type: WsMessageType::Event,
            event: Some(event.event.clone()),
            timestamp: event.timestamp,
            payload: event.payload(),
        }
    }

    /// Builds an `error` envelope answering the request `id`.
    #[must_use]
    pub fn error(id: impl Into<String>, code: u16, message: &str) -> Self {
        Self {
            id: id.into(),
            msg_type: WsMessageType::Error,
            event: None,
            timestamp: Utc::now(),
            payload: serde_json::json!({
                "code": code,
                "message": message,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Namespace;

    #[test]
    fn event_envelope_carries_name_and_data() {
        let event = FeedEvent::new(Namespace::default(), "emailmsg", "hello".into());
        let msg = WsMessage::from_event(&event);
        let Ok(json) = serde_json::to_value(&msg) else {
            panic!("serialization failed");
        };
        assert_eq!(json["type"], "event");
        assert_eq!(json["event"], "emailmsg");
        assert_eq!(json["payload"]["data"], "hello");
        assert_eq!(json["id"].as_str().map(str::len), Some(36));
    }

    #[test]
    fn error_envelope_omits_event() {
        let msg = WsMessage::error("req-1", 400, "malformed JSON");
        let json = serde_json::to_string(&msg).unwrap_or_default();
        assert!(!json.contains("\"event\""));
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("malformed JSON"));
    }

    #[test]
    fn parses_minimal_envelope() {
        let raw = r#"{"type":"event","event":"emailmsg","timestamp":"2026-10-17T12:00:00Z"}"#;
        let Ok(msg) = serde_json::from_str::<WsMessage>(raw) else {
            panic!("expected minimal envelope to parse");
        };
        assert_eq!(msg.msg_type, WsMessageType::Event);
        assert!(msg.id.is_empty());
        assert!(msg.payload.is_null());
    }
}
