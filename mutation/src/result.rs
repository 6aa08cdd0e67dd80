//! Mutation result types.

use quill_core::{Comment, Post};

/// Records removed as a side effect of a delete.
///
/// The directly deleted record is returned to the caller on its own; this
/// holds only what the cascade took with it, in removal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// Posts removed because their author was deleted.
    pub posts: Vec<Post>,
    /// Comments removed because their post or author was deleted.
    pub comments: Vec<Comment>,
}

impl CascadeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comments(comments: Vec<Comment>) -> Self {
        Self {
            posts: Vec::new(),
            comments,
        }
    }
}
