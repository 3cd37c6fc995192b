//! gsw-feed gateway entry point.
//!
//! Starts the Axum HTTP server with the emit endpoint and the per-namespace
//! WebSocket endpoint.

use tracing_subscriber::EnvFilter;

use gsw_feed::app_state::AppState;
use gsw_feed::config::GatewayConfig;
use gsw_feed::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting gsw-feed gateway");

    let state = AppState::new(config.event_bus_capacity);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    server::serve(listener, state).await?;

    Ok(())
}
