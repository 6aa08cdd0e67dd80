//! Record structures for Quill.
//!
//! Users, posts and comments are the three record kinds. Relations are stored
//! one way only, as ids on the child (`Post::author`, `Comment::author`,
//! `Comment::post`); reverse lookups are computed by scanning.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::{CommentId, PostId, UserId};

/// A record kind held in its own collection.
pub trait Record: Clone + Debug {
    /// Identifier type for this kind.
    type Id: Clone + Debug + Display + Eq + Hash;

    /// Collection name, used in errors and logs.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across all users, compared case-sensitively.
    pub email: String,
    pub age: Option<i64>,
}

/// A post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// The authoring user.
    pub author: UserId,
}

/// A comment left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    /// The commenting user.
    pub author: UserId,
    /// The post commented on.
    pub post: PostId,
}

impl Record for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl Record for Post {
    type Id = PostId;
    const KIND: &'static str = "post";

    fn id(&self) -> &PostId {
        &self.id
    }
}

impl Record for Comment {
    type Id = CommentId;
    const KIND: &'static str = "comment";

    fn id(&self) -> &CommentId {
        &self.id
    }
}

impl Post {
    /// Returns true if this post was written by `user`.
    pub fn is_by(&self, user: &UserId) -> bool {
        &self.author == user
    }
}

impl Comment {
    /// Returns true if this comment was written by `user`.
    pub fn is_by(&self, user: &UserId) -> bool {
        &self.author == user
    }

    /// Returns true if this comment is attached to `post`.
    pub fn is_on(&self, post: &PostId) -> bool {
        &self.post == post
    }
}
