//! Append-only log of received payloads.

/// Payloads in arrival order.
///
/// Unbounded and append-only: entries are never reordered or removed, so
/// [`MessageLog::len`] never decreases.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a payload.
    pub fn push(&mut self, payload: impl Into<String>) {
        self.entries.push(payload.into());
    }

    /// All payloads, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of payloads received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
