//! Listener transport: a WebSocket client that joins one namespace and
//! drives a [`crate::listener::MessageListener`] from the events it
//! receives.

pub mod feed_client;
pub mod frame;

pub use feed_client::FeedClient;
pub use frame::decode_event;
