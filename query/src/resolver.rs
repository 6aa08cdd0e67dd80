//! Top-level read resolvers.

use quill_core::{Comment, CommentId, Post, PostId, Record, User, UserId};
use quill_store::Store;

use crate::error::{QueryError, QueryResult};
use crate::relation::RelationResolver;

/// Returns true if `haystack` contains `needle`, ignoring case.
pub fn matches_query(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Query entry points: listings and single-record lookups.
#[derive(Debug, Clone, Copy)]
pub struct QueryResolver<'s> {
    store: &'s Store,
}

impl<'s> QueryResolver<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// Relation resolver over the same store, for nested fields.
    pub fn relations(&self) -> RelationResolver<'s> {
        RelationResolver::new(self.store)
    }

    /// All users, or those whose name contains `query` (case-insensitive).
    pub fn users(&self, query: Option<&str>) -> Vec<&'s User> {
        match query {
            None => self.store.users().iter().collect(),
            Some(q) => self.store.users().filter(|u| matches_query(&u.name, q)),
        }
    }

    /// All posts, or those whose title or body contains `query`
    /// (case-insensitive).
    pub fn posts(&self, query: Option<&str>) -> Vec<&'s Post> {
        match query {
            None => self.store.posts().iter().collect(),
            Some(q) => self
                .store
                .posts()
                .filter(|p| matches_query(&p.title, q) || matches_query(&p.body, q)),
        }
    }

    /// All comments, unfiltered.
    pub fn comments(&self) -> Vec<&'s Comment> {
        self.store.comments().iter().collect()
    }

    pub fn user(&self, id: &UserId) -> QueryResult<&'s User> {
        self.store
            .user(id)
            .ok_or_else(|| QueryError::not_found(User::KIND, id))
    }

    pub fn post(&self, id: &PostId) -> QueryResult<&'s Post> {
        self.store
            .post(id)
            .ok_or_else(|| QueryError::not_found(Post::KIND, id))
    }

    pub fn comment(&self, id: &CommentId) -> QueryResult<&'s Comment> {
        self.store
            .comment(id)
            .ok_or_else(|| QueryError::not_found(Comment::KIND, id))
    }
}
