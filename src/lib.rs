//! # gsw-feed
//!
//! Real-time namespace event feed for the ground station web console.
//!
//! A listener joins one namespace on a gateway, waits for one named event
//! (`emailmsg` by default), keeps every payload in arrival order, and
//! re-renders its display region as one `<p>` paragraph per payload on
//! each event. The gateway side accepts WebSocket connections per
//! namespace and fans out events that producers post over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! Producers (HTTP POST /api/v1/emit)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── EventBus (domain/)
//!     ├── WS Handler /{namespace} (ws/)
//!     │
//!     │   WebSocket, JSON envelopes
//!     │
//!     ├── FeedClient (client/)
//!     └── MessageListener → DisplayRegion (listener/)
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod listener;
pub mod server;
pub mod ws;
