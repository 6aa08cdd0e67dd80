//! Session error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Mutation error.
    #[error("mutation error: {0}")]
    MutationError(#[from] quill_mutation::MutationError),

    /// Query error.
    #[error("query error: {0}")]
    QueryError(#[from] quill_query::QueryError),

    /// Subscription refused.
    #[error("subscription error: {0}")]
    SubscriptionError(#[from] quill_subscription::SubscriptionError),

    /// Configuration error.
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl SessionError {
    /// The mutation error, if this is one.
    pub fn as_mutation(&self) -> Option<&quill_mutation::MutationError> {
        match self {
            SessionError::MutationError(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
