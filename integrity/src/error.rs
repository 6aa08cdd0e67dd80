//! Rejection reasons.

use quill_core::{PostId, UserId};
use thiserror::Error;

/// Result type for integrity checks: `Ok(())` means accepted.
pub type IntegrityResult<T> = Result<T, Rejection>;

/// Why a rule rejected a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Email already taken: {email}")]
    EmailTaken { email: String },

    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    #[error("Post not found: {id}")]
    PostNotFound { id: PostId },

    #[error("Post not published: {id}")]
    PostNotPublished { id: PostId },
}

impl Rejection {
    pub fn email_taken(email: impl Into<String>) -> Self {
        Self::EmailTaken {
            email: email.into(),
        }
    }

    pub fn user_not_found(id: &UserId) -> Self {
        Self::UserNotFound { id: id.clone() }
    }

    pub fn post_not_found(id: &PostId) -> Self {
        Self::PostNotFound { id: id.clone() }
    }

    pub fn post_not_published(id: &PostId) -> Self {
        Self::PostNotPublished { id: id.clone() }
    }
}
