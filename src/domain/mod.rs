//! Domain layer: namespaces, endpoints, and the event system.
//!
//! Shared by both sides of the feed: the gateway routes and fans out
//! [`FeedEvent`]s per [`Namespace`], and the listener connects to an
//! [`Endpoint`].

pub mod endpoint;
pub mod event_bus;
pub mod feed_event;
pub mod namespace;

pub use endpoint::Endpoint;
pub use event_bus::{EventBus, Subscription};
pub use feed_event::{DEFAULT_EVENT, FeedEvent};
pub use namespace::{DEFAULT_NAMESPACE, Namespace};
