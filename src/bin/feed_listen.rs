//! feed-listen entry point.
//!
//! Joins the configured namespace, renders every received event into the
//! configured log file (or stdout), and exits when the gateway closes the
//! connection or on Ctrl-C.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gsw_feed::client::FeedClient;
use gsw_feed::config::ListenerConfig;
use gsw_feed::listener::{DisplayRegion, FileRegion, MessageListener, StdoutRegion};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays the display region.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ListenerConfig::from_env()?;
    tracing::info!(
        endpoint = %config.endpoint,
        event = %config.event,
        log_path = ?config.log_path,
        "starting feed listener"
    );

    match config.log_path.clone() {
        Some(path) => run(config, FileRegion::new(path)).await,
        None => run(config, StdoutRegion).await,
    }
}

async fn run<R: DisplayRegion>(config: ListenerConfig, region: R) -> anyhow::Result<()> {
    let mut listener = MessageListener::new(region);
    let mut client = FeedClient::connect(config.endpoint.clone())
        .await
        .with_context(|| format!("connecting to {}", config.endpoint))?;

    tokio::select! {
        result = client.listen(&config.event, &mut listener) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }
    tracing::info!(received = listener.len(), "listener stopped");
    Ok(())
}
