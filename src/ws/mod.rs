//! WebSocket layer: upgrade handling, the per-connection loop, and the
//! message envelope.
//!
//! Each namespace is served at `/{namespace}`; a connection receives the
//! events emitted to its namespace only.

pub mod connection;
pub mod handler;
pub mod messages;
