//! Lazy relation traversal.
//!
//! Forward relations follow an id stored on the child. Reverse relations
//! scan the child collection in insertion order.

use quill_core::{Comment, Post, Record, User};
use quill_store::Store;

use crate::error::{QueryError, QueryResult};

/// Resolves the related records of a parent record.
#[derive(Debug, Clone, Copy)]
pub struct RelationResolver<'s> {
    store: &'s Store,
}

impl<'s> RelationResolver<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// The user who wrote `comment`.
    pub fn comment_author(&self, comment: &Comment) -> QueryResult<&'s User> {
        self.store.user(&comment.author).ok_or_else(|| {
            QueryError::dangling_reference(
                format!("comment {}", comment.id),
                User::KIND,
                &comment.author,
            )
        })
    }

    /// The post `comment` is attached to.
    pub fn comment_post(&self, comment: &Comment) -> QueryResult<&'s Post> {
        self.store.post(&comment.post).ok_or_else(|| {
            QueryError::dangling_reference(
                format!("comment {}", comment.id),
                Post::KIND,
                &comment.post,
            )
        })
    }

    /// The user who wrote `post`.
    pub fn post_author(&self, post: &Post) -> QueryResult<&'s User> {
        self.store.user(&post.author).ok_or_else(|| {
            QueryError::dangling_reference(format!("post {}", post.id), User::KIND, &post.author)
        })
    }

    /// Comments attached to `post`.
    pub fn post_comments(&self, post: &Post) -> Vec<&'s Comment> {
        self.store.comments().filter(|c| c.is_on(&post.id))
    }

    /// Posts written by `user`.
    pub fn user_posts(&self, user: &User) -> Vec<&'s Post> {
        self.store.posts().filter(|p| p.is_by(&user.id))
    }

    /// Comments written by `user`.
    pub fn user_comments(&self, user: &User) -> Vec<&'s Comment> {
        self.store.comments().filter(|c| c.is_by(&user.id))
    }
}
