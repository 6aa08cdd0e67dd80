//! Mutation error types.

use quill_core::{PostId, UserId};
use quill_integrity::Rejection;
use quill_store::StoreError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
///
/// Every error is raised before the store is touched, so a failed mutation
/// leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Email already taken: {email}")]
    EmailTaken { email: String },

    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    #[error("Post not found: {id}")]
    PostNotFound { id: PostId },

    #[error("Post not published: {id}")]
    PostNotPublished { id: PostId },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Generated {kind} id already in use: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

impl MutationError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        Self::EmailTaken {
            email: email.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<Rejection> for MutationError {
    fn from(r: Rejection) -> Self {
        match r {
            Rejection::EmailTaken { email } => Self::EmailTaken { email },
            Rejection::UserNotFound { id } => Self::UserNotFound { id },
            Rejection::PostNotFound { id } => Self::PostNotFound { id },
            Rejection::PostNotPublished { id } => Self::PostNotPublished { id },
        }
    }
}

impl From<StoreError> for MutationError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { kind, id } => Self::NotFound { kind, id },
            StoreError::DuplicateId { kind, id } => Self::DuplicateId { kind, id },
        }
    }
}
