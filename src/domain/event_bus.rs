//! Broadcast channel for feed events.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel. The emit
//! endpoint publishes a [`FeedEvent`] through the bus, and every
//! WebSocket connection joins one namespace through a [`Subscription`]
//! that yields only that namespace's events.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use super::{FeedEvent, Namespace};

/// Live subscription count per namespace.
type JoinedCounts = Arc<Mutex<HashMap<Namespace, usize>>>;

/// Broadcast bus for [`FeedEvent`]s.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity
/// (default 1 024). When the ring buffer is full, the oldest events are
/// dropped for lagging receivers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FeedEvent>,
    joined: JoinedCounts,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            joined: Arc::default(),
        }
    }

    /// Publishes an event to its namespace.
    ///
    /// Returns the number of subscriptions joined to the event's
    /// namespace. If there are none, the event is silently dropped.
    pub fn publish(&self, event: FeedEvent) -> usize {
        let listeners = self.listener_count(&event.namespace);
        if listeners > 0 {
            let _ = self.sender.send(event);
        }
        listeners
    }

    /// Joins `namespace`, receiving all of its future events.
    ///
    /// Each WebSocket connection calls this once, before the upgrade
    /// completes. The subscription leaves the namespace when dropped.
    #[must_use]
    pub fn join(&self, namespace: Namespace) -> Subscription {
        let receiver = self.sender.subscribe();
        *self.joined.lock().entry(namespace.clone()).or_insert(0) += 1;
        Subscription {
            namespace,
            receiver,
            joined: Arc::clone(&self.joined),
        }
    }

    /// Returns the number of live subscriptions on `namespace`.
    #[must_use]
    pub fn listener_count(&self, namespace: &Namespace) -> usize {
        self.joined.lock().get(namespace).copied().unwrap_or(0)
    }

    /// Returns the current number of active receivers across all
    /// namespaces.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A receiver joined to one namespace.
#[derive(Debug)]
pub struct Subscription {
    namespace: Namespace,
    receiver: broadcast::Receiver<FeedEvent>,
    joined: JoinedCounts,
}

impl Subscription {
    /// The joined namespace.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Waits for the next event addressed to this namespace.
    ///
    /// Cancel safe: dropping the future loses no event for this namespace.
    ///
    /// # Errors
    ///
    /// Returns [`broadcast::error::RecvError::Lagged`] if events were
    /// dropped for this receiver, and
    /// [`broadcast::error::RecvError::Closed`] once the bus is gone.
    pub async fn recv(&mut self) -> Result<FeedEvent, broadcast::error::RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if event.namespace == self.namespace {
                return Ok(event);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut joined = self.joined.lock();
        if let Some(count) = joined.get_mut(&self.namespace) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                joined.remove(&self.namespace);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ns(path: &str) -> Namespace {
        let Ok(ns) = Namespace::parse(path) else {
            panic!("bad namespace {path}");
        };
        ns
    }

    fn make_event(namespace: &str, data: &str) -> FeedEvent {
        FeedEvent::new(ns(namespace), "emailmsg", serde_json::Value::from(data))
    }

    #[test]
    fn publish_without_subscriptions_returns_zero() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(make_event("/test", "a")), 0);
    }

    #[tokio::test]
    async fn subscription_receives_events_in_order() {
        let bus = EventBus::new(16);
        let mut sub = bus.join(ns("/test"));

        bus.publish(make_event("/test", "a"));
        bus.publish(make_event("/test", "b"));

        let Ok(first) = sub.recv().await else {
            panic!("expected first event");
        };
        let Ok(second) = sub.recv().await else {
            panic!("expected second event");
        };
        assert_eq!(first.data, "a");
        assert_eq!(second.data, "b");
    }

    #[tokio::test]
    async fn subscription_skips_other_namespaces() {
        let bus = EventBus::new(16);
        let mut test_sub = bus.join(ns("/test"));
        let _other_sub = bus.join(ns("/other"));

        bus.publish(make_event("/other", "elsewhere"));
        bus.publish(make_event("/test", "here"));

        let Ok(event) = test_sub.recv().await else {
            panic!("expected event");
        };
        assert_eq!(event.data, "here");
        assert_eq!(test_sub.namespace().as_str(), "/test");
    }

    #[test]
    fn publish_counts_only_target_namespace() {
        let bus = EventBus::new(16);
        let _a = bus.join(ns("/test"));
        let _b = bus.join(ns("/test"));
        let _c = bus.join(ns("/other"));

        assert_eq!(bus.publish(make_event("/test", "x")), 2);
        assert_eq!(bus.publish(make_event("/other", "x")), 1);
        assert_eq!(bus.publish(make_event("/nobody", "x")), 0);
        assert_eq!(bus.receiver_count(), 3);
    }

    #[test]
    fn dropping_subscription_leaves_namespace() {
        let bus = EventBus::new(0);
        let first = bus.join(ns("/test"));
        let _second = bus.join(ns("/test"));
        assert_eq!(bus.listener_count(&ns("/test")), 2);

        drop(first);
        assert_eq!(bus.listener_count(&ns("/test")), 1);
        assert_eq!(bus.receiver_count(), 1);
    }
}
