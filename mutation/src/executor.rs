//! Mutation engine - coordinates mutation operations.
//!
//! The engine delegates to specialized operation modules in `ops/`:
//! - `ops/user.rs` - create and update users
//! - `ops/post.rs` - create and update posts
//! - `ops/comment.rs` - create, update and delete comments
//! - `ops/cascade.rs` - user and post deletion with cascade
//!
//! Each operation validates first, then writes, then publishes. The engine
//! holds the store exclusively for its lifetime, so operations never
//! interleave.

use quill_core::{
    Comment, CommentEvent, CommentId, CommentPatch, CreateCommentInput, CreatePostInput,
    CreateUserInput, IdGenerator, Post, PostId, PostPatch, User, UserId, UserPatch,
};
use quill_store::Store;
use quill_subscription::{Publish, Topic};
use tracing::{debug, info};

use crate::error::MutationResult;
use crate::ops;
use crate::result::CascadeReport;

/// Mutation engine.
pub struct MutationEngine<'a> {
    store: &'a mut Store,
    ids: &'a mut dyn IdGenerator,
    events: Option<&'a dyn Publish<CommentEvent>>,
}

impl<'a> MutationEngine<'a> {
    /// Create an engine that allocates ids from `ids` and publishes nothing.
    pub fn new(store: &'a mut Store, ids: &'a mut dyn IdGenerator) -> Self {
        Self {
            store,
            ids,
            events: None,
        }
    }

    /// Publish comment events to `events`.
    pub fn with_events(mut self, events: &'a dyn Publish<CommentEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Read access to the store being mutated.
    pub fn store(&self) -> &Store {
        &*self.store
    }

    // ==================== Users ====================

    /// Create a user. Fails with `EmailTaken` if the email is in use.
    pub fn create_user(&mut self, input: CreateUserInput) -> MutationResult<User> {
        let user = ops::create_user(self.store, self.ids, input)?;
        debug!(user = %user.id, "created user");
        Ok(user)
    }

    /// Update a user. Fails with `NotFound` or `EmailTaken`.
    pub fn update_user(&mut self, id: &UserId, patch: UserPatch) -> MutationResult<User> {
        let user = ops::update_user(self.store, id, patch)?;
        debug!(user = %user.id, "updated user");
        Ok(user)
    }

    /// Delete a user with its posts, their comments, and its own comments.
    ///
    /// Returns the user as it was before deletion.
    pub fn delete_user(&mut self, id: &UserId) -> MutationResult<User> {
        let (user, cascade) = ops::remove_user(self.store, id)?;
        info!(
            user = %user.id,
            posts = cascade.posts.len(),
            comments = cascade.comments.len(),
            "deleted user"
        );
        self.publish_removed(cascade);
        Ok(user)
    }

    // ==================== Posts ====================

    /// Create a post. Fails with `UserNotFound` if the author is missing.
    pub fn create_post(&mut self, input: CreatePostInput) -> MutationResult<Post> {
        let post = ops::create_post(self.store, self.ids, input)?;
        debug!(post = %post.id, author = %post.author, "created post");
        Ok(post)
    }

    /// Update a post. Fails with `NotFound`.
    pub fn update_post(&mut self, id: &PostId, patch: PostPatch) -> MutationResult<Post> {
        let post = ops::update_post(self.store, id, patch)?;
        debug!(post = %post.id, "updated post");
        Ok(post)
    }

    /// Delete a post and its comments.
    pub fn delete_post(&mut self, id: &PostId) -> MutationResult<Post> {
        let (post, cascade) = ops::remove_post(self.store, id)?;
        info!(post = %post.id, comments = cascade.comments.len(), "deleted post");
        self.publish_removed(cascade);
        Ok(post)
    }

    // ==================== Comments ====================

    /// Create a comment. Fails with `UserNotFound`, then `PostNotPublished`.
    pub fn create_comment(&mut self, input: CreateCommentInput) -> MutationResult<Comment> {
        let comment = ops::create_comment(self.store, self.ids, input)?;
        debug!(comment = %comment.id, post = %comment.post, "created comment");
        self.publish(CommentEvent::created(comment.clone()));
        Ok(comment)
    }

    /// Update a comment. Fails with `NotFound`.
    pub fn update_comment(
        &mut self,
        id: &CommentId,
        patch: CommentPatch,
    ) -> MutationResult<Comment> {
        let comment = ops::update_comment(self.store, id, patch)?;
        debug!(comment = %comment.id, "updated comment");
        self.publish(CommentEvent::updated(comment.clone()));
        Ok(comment)
    }

    /// Delete a comment. Fails with `NotFound`.
    pub fn delete_comment(&mut self, id: &CommentId) -> MutationResult<Comment> {
        let comment = ops::delete_comment(self.store, id)?;
        debug!(comment = %comment.id, "deleted comment");
        self.publish(CommentEvent::deleted(comment.clone()));
        Ok(comment)
    }

    // ==================== Events ====================

    fn publish(&self, event: CommentEvent) {
        if let Some(events) = self.events {
            let topic = Topic::comment(event.post());
            events.publish(&topic, event);
        }
    }

    fn publish_removed(&self, cascade: CascadeReport) {
        for comment in cascade.comments {
            self.publish(CommentEvent::deleted(comment));
        }
    }
}
