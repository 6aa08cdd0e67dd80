//! Whole-store invariant audit.

use quill_core::{CommentId, PostId, UserId};
use quill_store::Store;
use std::collections::HashMap;
use std::fmt;

/// A broken store invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two or more users share an email.
    DuplicateEmail { email: String, users: Vec<UserId> },
    /// A post's author does not exist.
    DanglingPostAuthor { post: PostId, author: UserId },
    /// A comment's author does not exist.
    DanglingCommentAuthor { comment: CommentId, author: UserId },
    /// A comment's post does not exist.
    DanglingCommentPost { comment: CommentId, post: PostId },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateEmail { email, users } => {
                write!(f, "email {email} shared by {} users", users.len())
            }
            Violation::DanglingPostAuthor { post, author } => {
                write!(f, "post {post} references missing user {author}")
            }
            Violation::DanglingCommentAuthor { comment, author } => {
                write!(f, "comment {comment} references missing user {author}")
            }
            Violation::DanglingCommentPost { comment, post } => {
                write!(f, "comment {comment} references missing post {post}")
            }
        }
    }
}

/// Check every stored record against the uniqueness and reference invariants.
///
/// Publication of a comment's post is only checked when the comment is
/// created, so it is not audited here.
pub fn audit(store: &Store) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut by_email: HashMap<&str, Vec<UserId>> = HashMap::new();
    for user in store.users().iter() {
        by_email
            .entry(user.email.as_str())
            .or_default()
            .push(user.id.clone());
    }
    let mut duplicates: Vec<_> = by_email
        .into_iter()
        .filter(|(_, users)| users.len() > 1)
        .collect();
    duplicates.sort_by_key(|(email, _)| *email);
    for (email, users) in duplicates {
        violations.push(Violation::DuplicateEmail {
            email: email.to_string(),
            users,
        });
    }

    for post in store.posts().iter() {
        if !store.users().contains(&post.author) {
            violations.push(Violation::DanglingPostAuthor {
                post: post.id.clone(),
                author: post.author.clone(),
            });
        }
    }

    for comment in store.comments().iter() {
        if !store.users().contains(&comment.author) {
            violations.push(Violation::DanglingCommentAuthor {
                comment: comment.id.clone(),
                author: comment.author.clone(),
            });
        }
        if !store.posts().contains(&comment.post) {
            violations.push(Violation::DanglingCommentPost {
                comment: comment.id.clone(),
                post: comment.post.clone(),
            });
        }
    }

    violations
}
