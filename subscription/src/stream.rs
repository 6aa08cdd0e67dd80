//! Subscriber side of a topic.

use std::sync::Weak;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};
use tracing::warn;

use crate::broker::{self, Channels};
use crate::topic::Topic;

/// Events published to one topic after the stream was opened.
///
/// The stream ends when the broker is dropped. A subscriber that falls more
/// than the broker's capacity behind skips the events it missed and keeps
/// going. Dropping the stream unsubscribes, and dropping the last stream of
/// a topic closes its channel.
#[derive(Debug)]
pub struct EventStream<E> {
    topic: Topic,
    receiver: broadcast::Receiver<E>,
    channels: Weak<Channels<E>>,
}

impl<E> Drop for EventStream<E> {
    fn drop(&mut self) {
        broker::release(&self.channels, &self.topic);
    }
}

impl<E: Clone> EventStream<E> {
    pub(crate) fn new(
        topic: Topic,
        receiver: broadcast::Receiver<E>,
        channels: Weak<Channels<E>>,
    ) -> Self {
        Self {
            topic,
            receiver,
            channels,
        }
    }

    /// The topic this stream listens on.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Wait for the next event; `None` once the broker is gone.
    pub async fn next(&mut self) -> Option<E> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(topic = %self.topic, skipped, "subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next already-delivered event without waiting.
    pub fn try_next(&mut self) -> Option<E> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(topic = %self.topic, skipped, "subscriber lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Drain every already-delivered event.
    pub fn drain(&mut self) -> Vec<E> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
