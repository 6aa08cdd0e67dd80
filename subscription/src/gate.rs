//! Authorization of comment subscriptions.

use quill_core::{Comment, CommentEvent, PostId};
use quill_integrity::IntegrityRules;
use quill_store::Store;
use tracing::debug;

use crate::broker::Broker;
use crate::error::{SubscriptionError, SubscriptionResult};
use crate::stream::EventStream;
use crate::topic::Topic;

/// Decides whether a subscriber may watch a post's comments.
pub struct SubscriptionGate<'a> {
    store: &'a Store,
    broker: &'a Broker<CommentEvent>,
}

impl<'a> SubscriptionGate<'a> {
    pub fn new(store: &'a Store, broker: &'a Broker<CommentEvent>) -> Self {
        Self { store, broker }
    }

    /// Open the comment event stream of `post`.
    ///
    /// Refused with `PostNotFound` unless the post exists and is published.
    /// The check happens once, before streaming starts.
    pub fn authorize(&self, post: &PostId) -> SubscriptionResult<EventStream<CommentEvent>> {
        if IntegrityRules::new(self.store).post_published(post).is_err() {
            debug!(%post, "subscription refused");
            return Err(SubscriptionError::post_not_found(post));
        }
        debug!(%post, "subscription opened");
        Ok(self.broker.subscribe(&Topic::comment(post)))
    }

    /// Stream of comments added to `post`.
    pub fn comment_added(&self, post: &PostId) -> SubscriptionResult<CommentAdded> {
        self.authorize(post).map(CommentAdded)
    }
}

/// Comments created on one post; deletion events are skipped.
#[derive(Debug)]
pub struct CommentAdded(EventStream<CommentEvent>);

impl CommentAdded {
    pub fn topic(&self) -> &Topic {
        self.0.topic()
    }

    /// Wait for the next new comment; `None` once the broker is gone.
    pub async fn next(&mut self) -> Option<Comment> {
        loop {
            if let Some(comment) = self.0.next().await?.into_created() {
                return Some(comment);
            }
        }
    }

    /// Take the next already-delivered new comment without waiting.
    pub fn try_next(&mut self) -> Option<Comment> {
        loop {
            if let Some(comment) = self.0.try_next()?.into_created() {
                return Some(comment);
            }
        }
    }

    /// The underlying event stream, deletions included.
    pub fn into_events(self) -> EventStream<CommentEvent> {
        self.0
    }
}
