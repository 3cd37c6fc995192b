//! Decoding inbound text frames into event payloads.

use serde_json::Value;

use crate::ws::messages::{WsMessage, WsMessageType};

/// Extracts the payload text of an `event` envelope named `event_name`.
///
/// Returns `None` (and logs) for frames that are not JSON envelopes,
/// envelopes of another type or event name, and events without a `data`
/// field. String data is returned as-is; any other JSON value is returned
/// as its JSON text.
#[must_use]
pub fn decode_event(text: &str, event_name: &str) -> Option<String> {
    let msg = match serde_json::from_str::<WsMessage>(text) {
        Ok(msg) => msg,
        Err(err) => {
            tracing::warn!(error = %err, "skipping malformed frame");
            return None;
        }
    };

    match msg.msg_type {
        WsMessageType::Event => {}
        WsMessageType::Error => {
            tracing::warn!(id = %msg.id, payload = %msg.payload, "gateway reported an error");
            return None;
        }
        WsMessageType::Command | WsMessageType::Response => return None,
    }

    if msg.event.as_deref() != Some(event_name) {
        tracing::trace!(event = ?msg.event, "ignoring event");
        return None;
    }

    match msg.payload.get("data") {
        Some(Value::String(data)) => Some(data.clone()),
        Some(other) => Some(other.to_string()),
        None => {
            tracing::warn!(id = %msg.id, "event without data field");
            None
        }
    }
}
