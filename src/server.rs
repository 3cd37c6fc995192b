//! Router assembly and serving.

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::error::FeedError;
use crate::ws::handler::ws_handler;

/// Builds the full gateway router: REST routes, `/health`, and the
/// `/{namespace}` WebSocket endpoint.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/{namespace}", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the gateway on an already bound listener until the server stops.
///
/// # Errors
///
/// Returns [`FeedError::Internal`] if the server fails with an I/O error.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), FeedError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(addr = %addr, "server listening");
    }
    axum::serve(listener, build_app(state))
        .await
        .map_err(|e| FeedError::Internal(format!("server stopped: {e}")))?;
    Ok(())
}
