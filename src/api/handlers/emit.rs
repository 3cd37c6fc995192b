//! Event emission endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::{FeedEvent, Namespace};
use crate::error::FeedError;

/// Request body for `POST /emit`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmitRequest {
    /// Target namespace path, e.g. `"/test"`.
    pub namespace: String,
    /// Event name, e.g. `"emailmsg"`.
    pub event: String,
    /// Payload data delivered to listeners as `{"data": ...}`. Required
    /// and must not be `null`.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Response body for `POST /emit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitResponse {
    /// Number of live WebSocket connections joined to the target
    /// namespace when the event was published.
    pub delivered: usize,
}

/// `POST /emit` — Publish an event to a namespace.
///
/// # Errors
///
/// Returns [`FeedError::InvalidNamespace`] on a bad namespace path and
/// [`FeedError::InvalidRequest`] on an empty event name or a missing or
/// `null` `data` field.
pub async fn emit_event(
    State(state): State<AppState>,
    Json(req): Json<EmitRequest>,
) -> Result<impl IntoResponse, FeedError> {
    let namespace = Namespace::parse(&req.namespace)?;
    let event_name = req.event.trim();
    if event_name.is_empty() {
        return Err(FeedError::InvalidRequest("event name must not be empty".to_string()));
    }
    if req.data.is_null() {
        return Err(FeedError::InvalidRequest("data must be present and not null".to_string()));
    }

    let event = FeedEvent::new(namespace, event_name, req.data);
    tracing::info!(namespace = %event.namespace, event = %event.event, "emitting event");
    let delivered = state.event_bus.publish(event);

    Ok((StatusCode::ACCEPTED, Json(EmitResponse { delivered })))
}

/// Emission routes, mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/emit", post(emit_event))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    fn emit_request(body: serde_json::Value) -> Request<Body> {
        let Ok(request) = Request::post("/emit")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("failed to build request");
        };
        request
    }

    #[tokio::test]
    async fn publishes_to_event_bus() {
        let state = AppState::new(16);
        let Ok(namespace) = Namespace::parse("/test") else {
            panic!("bad namespace");
        };
        let mut sub = state.event_bus.join(namespace);
        let app = routes().with_state(state);

        let request = emit_request(serde_json::json!({
            "namespace": "/test",
            "event": "emailmsg",
            "data": "hello",
        }));
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let Ok(event) = sub.recv().await else {
            panic!("expected published event");
        };
        assert_eq!(event.namespace.as_str(), "/test");
        assert_eq!(event.event, "emailmsg");
        assert_eq!(event.data, "hello");
    }

    #[tokio::test]
    async fn rejects_bad_namespace() {
        let app = routes().with_state(AppState::new(16));
        let request = emit_request(serde_json::json!({
            "namespace": "test",
            "event": "emailmsg",
            "data": "x",
        }));
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_blank_event_name() {
        let app = routes().with_state(AppState::new(16));
        let request = emit_request(serde_json::json!({
            "namespace": "/test",
            "event": "  ",
        }));
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_or_null_data() {
        let state = AppState::new(16);
        let Ok(namespace) = Namespace::parse("/test") else {
            panic!("bad namespace");
        };
        let _sub = state.event_bus.join(namespace);

        for body in [
            serde_json::json!({ "namespace": "/test", "event": "emailmsg" }),
            serde_json::json!({ "namespace": "/test", "event": "emailmsg", "data": null }),
        ] {
            let app = routes().with_state(state.clone());
            let Ok(response) = app.oneshot(emit_request(body)).await else {
                panic!("request failed");
            };
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn delivered_counts_only_target_namespace() {
        let state = AppState::new(16);
        let Ok(namespace) = Namespace::parse("/test") else {
            panic!("bad namespace");
        };
        let _sub = state.event_bus.join(namespace);
        let app = routes().with_state(state);

        let request = emit_request(serde_json::json!({
            "namespace": "/nobody",
            "event": "emailmsg",
            "data": "x",
        }));
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read body");
        };
        let Ok(body) = serde_json::from_slice::<EmitResponse>(&bytes) else {
            panic!("body is not an EmitResponse");
        };
        assert_eq!(body.delivered, 0);
    }
}
