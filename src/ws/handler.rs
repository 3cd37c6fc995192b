//! Axum WebSocket upgrade handler.

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::domain::Namespace;
use crate::error::FeedError;

/// `GET /{namespace}` — Upgrade HTTP connection to WebSocket on a namespace.
///
/// The namespace is joined before the upgrade response is sent, so a
/// client sees every event published after its handshake completes.
///
/// # Errors
///
/// Returns [`FeedError::InvalidNamespace`] if the path segment is not a
/// valid namespace.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(segment): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, FeedError> {
    let namespace = Namespace::from_segment(&segment)?;
    tracing::info!(namespace = %namespace, "ws client joining namespace");
    let subscription = state.event_bus.join(namespace);

    Ok(ws.on_upgrade(move |socket| run_connection(socket, subscription)))
}
