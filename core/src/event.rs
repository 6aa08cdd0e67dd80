//! Events published when comments change.

use serde::{Deserialize, Serialize};

use crate::{Comment, PostId};

/// What happened to the comment carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

/// A change to a comment, routed to subscribers of the comment's post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEvent {
    pub mutation: MutationKind,
    pub data: Comment,
}

impl CommentEvent {
    pub fn created(comment: Comment) -> Self {
        Self {
            mutation: MutationKind::Created,
            data: comment,
        }
    }

    pub fn updated(comment: Comment) -> Self {
        Self {
            mutation: MutationKind::Updated,
            data: comment,
        }
    }

    pub fn deleted(comment: Comment) -> Self {
        Self {
            mutation: MutationKind::Deleted,
            data: comment,
        }
    }

    /// The post whose subscribers receive this event.
    pub fn post(&self) -> &PostId {
        &self.data.post
    }

    /// The comment if this event announces a new one.
    pub fn into_created(self) -> Option<Comment> {
        match self.mutation {
            MutationKind::Created => Some(self.data),
            MutationKind::Updated | MutationKind::Deleted => None,
        }
    }
}
