//! Shared application state injected into all Axum handlers.

use crate::domain::EventBus;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event bus fanning emitted events out to WebSocket connections.
    pub event_bus: EventBus,
}

impl AppState {
    /// Creates state around a fresh [`EventBus`] of the given capacity.
    #[must_use]
    pub fn new(event_bus_capacity: usize) -> Self {
        Self {
            event_bus: EventBus::new(event_bus_capacity),
        }
    }
}
