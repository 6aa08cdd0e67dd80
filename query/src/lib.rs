//! Quill Query
//!
//! Read resolvers over the record store.
//!
//! Responsibilities:
//! - List users, posts and comments, optionally filtered by substring
//! - Look up single records by id
//! - Resolve relations lazily (author of a post, comments of a post, ...)
//!
//! Nothing is cached: every call rescans the store, so results always
//! reflect the latest mutation.

mod error;
mod relation;
mod resolver;

pub use error::{QueryError, QueryResult};
pub use relation::RelationResolver;
pub use resolver::{matches_query, QueryResolver};
