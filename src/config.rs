//! Configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The gateway reads [`GatewayConfig`],
//! the `feed-listen` binary reads [`ListenerConfig`].

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::{DEFAULT_EVENT, Endpoint, Namespace};
use crate::error::FeedError;

/// Gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:5000`).
    pub listen_addr: SocketAddr,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, FeedError> {
        dotenvy::dotenv().ok();

        let raw_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|_| FeedError::InvalidEndpoint(format!("LISTEN_ADDR {raw_addr:?}")))?;

        let event_bus_capacity = parse_env("EVENT_BUS_CAPACITY", 1024);

        Ok(Self {
            listen_addr,
            event_bus_capacity,
        })
    }
}

/// Listener configuration.
///
/// Loaded once at startup via [`ListenerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Endpoint to connect to.
    pub endpoint: Endpoint,

    /// Name of the event to render.
    pub event: String,

    /// File the rendered log is written to; stdout when `None`.
    pub log_path: Option<PathBuf>,
}

impl ListenerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidNamespace`] if `FEED_NAMESPACE` is not a
    /// valid namespace path, or [`FeedError::InvalidEndpoint`] if
    /// `FEED_HOST` is unusable.
    pub fn from_env() -> Result<Self, FeedError> {
        dotenvy::dotenv().ok();

        let host = std::env::var("FEED_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_env("FEED_PORT", 5000_u16);
        let namespace = match std::env::var("FEED_NAMESPACE") {
            Ok(raw) => Namespace::parse(&raw)?,
            Err(_) => Namespace::default(),
        };
        let endpoint = Endpoint::new(host, port, namespace)?;

        let event = std::env::var("FEED_EVENT")
            .ok()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_EVENT.to_string());

        let log_path = std::env::var_os("FEED_LOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            endpoint,
            event,
            log_path,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing() {
        let value: u16 = parse_env("GSW_FEED_SURELY_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
    }
}
