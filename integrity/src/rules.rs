//! Validation rules evaluated before a mutation is applied.

use quill_core::{PostId, UserId};
use quill_store::Store;

use crate::error::{IntegrityResult, Rejection};

/// Read-only rule set over a store.
#[derive(Debug, Clone, Copy)]
pub struct IntegrityRules<'s> {
    store: &'s Store,
}

impl<'s> IntegrityRules<'s> {
    /// Create a rule set bound to `store`.
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// Rejects if any user already has `email` (exact, case-sensitive).
    pub fn email_available(&self, email: &str) -> IntegrityResult<()> {
        if self.store.email_in_use(email) {
            return Err(Rejection::email_taken(email));
        }
        Ok(())
    }

    /// Rejects if a user other than `user` already has `email`.
    ///
    /// Re-submitting a user's own current email is accepted.
    pub fn email_available_for(&self, user: &UserId, email: &str) -> IntegrityResult<()> {
        let taken = self
            .store
            .users()
            .iter()
            .any(|u| u.email == email && &u.id != user);
        if taken {
            return Err(Rejection::email_taken(email));
        }
        Ok(())
    }

    pub fn user_exists(&self, id: &UserId) -> IntegrityResult<()> {
        if !self.store.users().contains(id) {
            return Err(Rejection::user_not_found(id));
        }
        Ok(())
    }

    pub fn post_exists(&self, id: &PostId) -> IntegrityResult<()> {
        if !self.store.posts().contains(id) {
            return Err(Rejection::post_not_found(id));
        }
        Ok(())
    }

    /// Accepts only a post that exists and is published.
    ///
    /// A missing post is reported as `PostNotPublished` too: from the
    /// commenter's side both mean "this post takes no comments".
    pub fn post_published(&self, id: &PostId) -> IntegrityResult<()> {
        match self.store.post(id) {
            Some(post) if post.published => Ok(()),
            _ => Err(Rejection::post_not_published(id)),
        }
    }

    /// Preconditions for a new comment, author first.
    pub fn can_comment(&self, author: &UserId, post: &PostId) -> IntegrityResult<()> {
        self.user_exists(author)?;
        self.post_published(post)
    }
}
