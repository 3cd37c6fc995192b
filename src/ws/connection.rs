//! WebSocket connection loop.
//!
//! Handles the read/write loop for a single WebSocket connection joined
//! to one namespace, forwarding that namespace's events and rejecting
//! anything the client sends.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::WsMessage;
use crate::domain::Subscription;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Forwards the events of the joined namespace from `subscription`.
/// - Answers client text frames with an error envelope; namespaces are
///   publish-only from the gateway side.
pub async fn run_connection(socket: WebSocket, mut subscription: Subscription) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let namespace = subscription.namespace().clone();
    tracing::debug!(namespace = %namespace, "ws connection opened");

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(resp_json) = handle_text_message(&text)
                            && ws_tx.send(Message::text(resp_json)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(error = %err, "ws read failed");
                        break;
                    }
                    _ => {}
                }
            }
            // Event from EventBus
            event = subscription.recv() => {
                match event {
                    Ok(feed_event) => {
                        let json = serde_json::to_string(&WsMessage::from_event(&feed_event))
                            .unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, namespace = %namespace, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!(namespace = %namespace, "ws connection closed");
}

/// Handles a text message from the client, returning an optional JSON response.
fn handle_text_message(text: &str) -> Option<String> {
    let reply = match serde_json::from_str::<WsMessage>(text) {
        Ok(msg) => WsMessage::error(msg.id, 405, "namespace is publish-only"),
        Err(_) => WsMessage::error(String::new(), 400, "malformed JSON"),
    };
    serde_json::to_string(&reply).ok()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn reply_for(text: &str) -> serde_json::Value {
        let Some(reply) = handle_text_message(text) else {
            panic!("expected a reply");
        };
        let Ok(json) = serde_json::from_str(&reply) else {
            panic!("reply is not JSON");
        };
        json
    }

    #[test]
    fn malformed_json_is_400() {
        let json = reply_for("not json");
        assert_eq!(json["type"], "error");
        assert_eq!(json["payload"]["code"], 400);
    }

    #[test]
    fn well_formed_command_is_405_with_same_id() {
        let json = reply_for(
            r#"{"id":"c-1","type":"command","timestamp":"2026-10-17T12:00:00Z","payload":{}}"#,
        );
        assert_eq!(json["id"], "c-1");
        assert_eq!(json["payload"]["code"], 405);
    }
}
