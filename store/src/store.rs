//! The three-collection record store.

use quill_core::{Comment, CommentId, Post, PostId, User, UserId};

use crate::collection::Collection;

/// In-memory store owning users, posts and comments.
///
/// Every mutation happens through `&mut Store`, so one writer at a time is
/// enforced by the borrow checker and no caller can observe a half-applied
/// insert or cascade.
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Collection<User>,
    posts: Collection<Post>,
    comments: Collection<Comment>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut Collection<User> {
        &mut self.users
    }

    pub fn posts(&self) -> &Collection<Post> {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut Collection<Post> {
        &mut self.posts
    }

    pub fn comments(&self) -> &Collection<Comment> {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Collection<Comment> {
        &mut self.comments
    }

    // ==================== Lookups ====================

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.get(id)
    }

    /// Returns true if any user has exactly this email.
    pub fn email_in_use(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.users.len() + self.posts.len() + self.comments.len()
    }

    /// Largest id across all collections that parses as an integer.
    pub fn highest_numeric_id(&self) -> Option<u64> {
        let users = self.users.iter().map(|u| u.id.as_str());
        let posts = self.posts.iter().map(|p| p.id.as_str());
        let comments = self.comments.iter().map(|c| c.id.as_str());
        users
            .chain(posts)
            .chain(comments)
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
    }
}
