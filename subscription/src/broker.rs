//! In-process publish/subscribe.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::broadcast;
use tracing::trace;

use crate::stream::EventStream;
use crate::topic::Topic;

/// Events buffered per topic before slow subscribers start lagging.
pub const DEFAULT_CAPACITY: usize = 64;

/// Largest per-topic buffer a broker will allocate.
pub const MAX_CAPACITY: usize = 1 << 16;

/// Open channels by topic.
pub(crate) type Channels<E> = RwLock<HashMap<Topic, broadcast::Sender<E>>>;

/// Publishing side of the event transport.
pub trait Publish<E> {
    /// Deliver `event` to the current subscribers of `topic`.
    ///
    /// Never blocks. Returns how many subscribers will see the event; zero
    /// when nobody is listening, in which case the event is dropped.
    fn publish(&self, topic: &Topic, event: E) -> usize;
}

/// Topic-keyed broadcast channels.
///
/// Channels are created on first subscription and pruned when their last
/// stream is dropped, or when a publish finds no one listening. Cloning
/// shares the same channels.
#[derive(Debug)]
pub struct Broker<E> {
    channels: Arc<Channels<E>>,
    capacity: usize,
}

impl<E> Clone for Broker<E> {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
            capacity: self.capacity,
        }
    }
}

impl<E: Clone + Send + 'static> Default for Broker<E> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<E: Clone + Send + 'static> Broker<E> {
    /// Create a broker buffering up to `capacity` events per topic.
    ///
    /// The capacity is clamped to `1..=MAX_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.clamp(1, MAX_CAPACITY),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Open a stream of the events published to `topic` from now on.
    pub fn subscribe(&self, topic: &Topic) -> EventStream<E> {
        let mut channels = self.channels.write();
        let receiver = channels
            .entry(topic.clone())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe();
        trace!(%topic, "subscribed");
        EventStream::new(topic.clone(), receiver, Arc::downgrade(&self.channels))
    }

    /// Number of live subscribers on `topic`.
    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.channels
            .read()
            .get(topic)
            .map_or(0, |sender| sender.receiver_count())
    }

    /// Number of topics with an open channel.
    pub fn topic_count(&self) -> usize {
        self.channels.read().len()
    }
}

/// Close the channel of `topic` once its last stream leaves.
///
/// Runs while the leaving stream's receiver is still counted.
pub(crate) fn release<E>(channels: &Weak<Channels<E>>, topic: &Topic) {
    let Some(channels) = channels.upgrade() else {
        return;
    };
    let mut channels = channels.write();
    if channels
        .get(topic)
        .is_some_and(|sender| sender.receiver_count() <= 1)
    {
        channels.remove(topic);
        trace!(%topic, "pruned idle topic");
    }
}

impl<E: Clone + Send + 'static> Publish<E> for Broker<E> {
    fn publish(&self, topic: &Topic, event: E) -> usize {
        let delivered = match self.channels.read().get(topic) {
            Some(sender) => sender.send(event).unwrap_or(0),
            None => return 0,
        };
        if delivered == 0 {
            let mut channels = self.channels.write();
            if channels
                .get(topic)
                .is_some_and(|sender| sender.receiver_count() == 0)
            {
                channels.remove(topic);
                trace!(%topic, "pruned idle topic");
            }
        }
        trace!(%topic, delivered, "published");
        delivered
    }
}
