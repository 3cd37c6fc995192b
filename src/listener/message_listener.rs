//! The event handler that owns the log and the region.

use super::display::{DisplayRegion, render_paragraphs};
use super::message_log::MessageLog;
use crate::error::FeedError;

/// Appends each received payload and re-renders the whole log into its
/// [`DisplayRegion`].
///
/// Constructed once at startup and handed by `&mut` to the receive loop,
/// which calls [`MessageListener::handle`] once per event, each call
/// running to completion before the next frame is read.
#[derive(Debug)]
pub struct MessageListener<R> {
    log: MessageLog,
    region: R,
}

impl<R: DisplayRegion> MessageListener<R> {
    /// Creates a listener with an empty log. The region is not touched
    /// until the first event.
    #[must_use]
    pub fn new(region: R) -> Self {
        Self {
            log: MessageLog::new(),
            region,
        }
    }

    /// Handles one event payload: append, rebuild, replace.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Render`] if the region cannot be written. The
    /// payload stays in the log; the next successful render includes it.
    pub async fn handle(&mut self, payload: impl Into<String>) -> Result<(), FeedError> {
        let payload = payload.into();
        tracing::debug!(payload = %payload, "received message");
        self.log.push(payload);

        let html = render_paragraphs(self.log.entries());
        self.region.replace(&html).await?;
        tracing::trace!(messages = self.log.len(), bytes = html.len(), "region rendered");
        Ok(())
    }

    /// Payloads received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        self.log.entries()
    }

    /// Number of payloads received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns `true` if no payload has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// The display region.
    #[must_use]
    pub const fn region(&self) -> &R {
        &self.region
    }
}
