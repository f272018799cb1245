//! In-process notification bus with named topics.
//!
//! Topics carry no payload beyond "something changed"; subscribers re-read
//! whatever records they care about. Publishing is fire-and-forget - a topic
//! with no subscribers is not an error. Subscription registration is
//! append-only for the process lifetime; components do not unsubscribe.

use dashmap::DashMap;
use tokio::sync::broadcast;

use statline_domain::StatusDomain;

/// Buffered notifications per topic channel. A receiver that lags just
/// recomputes once when it catches up, so a small buffer is enough.
const TOPIC_CAPACITY: usize = 16;

/// Named notification topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A character's spell slot rows changed.
    SpellSlotsChanged,
    /// A character's tracked feature counters changed.
    TrackedFeaturesChanged,
    /// Some status record was upserted or removed.
    StatusChanged,
    /// The status record for one specific domain changed.
    DomainStatusChanged(StatusDomain),
}

/// A delivered notification. The payload is only the topic itself.
#[derive(Debug, Clone, Copy)]
pub struct Notification {
    pub topic: Topic,
}

/// Process-wide publish/subscribe facility.
pub struct NotificationBus {
    channels: DashMap<Topic, broadcast::Sender<Notification>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    fn channel(&self, topic: Topic) -> broadcast::Sender<Notification> {
        self.channels
            .entry(topic)
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0)
            .clone()
    }

    /// Subscribe to a topic. The receiver yields one notification per
    /// publish that happens after this call.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Notification> {
        self.channel(topic).subscribe()
    }

    /// Publish to a topic, waking every current subscriber.
    pub fn publish(&self, topic: Topic) {
        let receivers = self.channel(topic).send(Notification { topic }).unwrap_or(0);
        tracing::trace!(?topic, receivers, "published notification");
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
