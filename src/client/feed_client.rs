//! WebSocket client joined to one namespace.

use std::fmt;

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::frame::decode_event;
use crate::domain::Endpoint;
use crate::error::FeedError;
use crate::listener::{DisplayRegion, MessageListener};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A live connection to an [`Endpoint`].
///
/// Owns the socket for its whole lifetime; dropping the client drops the
/// connection.
pub struct FeedClient {
    endpoint: Endpoint,
    stream: WsStream,
}

impl fmt::Debug for FeedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl FeedClient {
    /// Opens the WebSocket connection to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] if the TCP connect or the
    /// WebSocket handshake fails.
    pub async fn connect(endpoint: Endpoint) -> Result<Self, FeedError> {
        let url = endpoint.url();
        let (stream, _response) = connect_async(url.as_str()).await?;
        tracing::info!(url = %url, "connected");
        Ok(Self { endpoint, stream })
    }

    /// The endpoint this client is connected to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Waits for the next `event_name` event and returns its payload text.
    ///
    /// Frames for other events, non-event envelopes, and malformed frames
    /// are skipped. Returns `Ok(None)` once the connection is closed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] if reading from the socket fails.
    pub async fn next_event(&mut self, event_name: &str) -> Result<Option<String>, FeedError> {
        while let Some(frame) = self.stream.next().await {
            match frame? {
                Message::Text(text) => {
                    if let Some(payload) = decode_event(text.as_str(), event_name) {
                        return Ok(Some(payload));
                    }
                }
                Message::Close(close) => {
                    tracing::debug!(frame = ?close, "close frame received");
                    return Ok(None);
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Feeds every `event_name` payload to `listener` until the connection
    /// closes.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] on socket failure and
    /// [`FeedError::Render`] if the listener cannot write its region.
    pub async fn listen<R: DisplayRegion>(
        &mut self,
        event_name: &str,
        listener: &mut MessageListener<R>,
    ) -> Result<(), FeedError> {
        while let Some(payload) = self.next_event(event_name).await? {
            listener.handle(payload).await?;
        }
        tracing::info!(endpoint = %self.endpoint, received = listener.len(), "connection closed");
        Ok(())
    }

    /// Sends a close frame to the gateway.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] if the close frame cannot be sent.
    pub async fn close(mut self) -> Result<(), FeedError> {
        self.stream.close(None).await?;
        Ok(())
    }
}
