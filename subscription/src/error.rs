//! Subscription error types.

use quill_core::PostId;
use thiserror::Error;

/// Result type for subscription requests.
pub type SubscriptionResult<T> = Result<T, SubscriptionError>;

/// Reasons a subscription is refused before any event is streamed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// The post does not exist or is not published.
    #[error("Post not found: {id}")]
    PostNotFound { id: PostId },
}

impl SubscriptionError {
    pub fn post_not_found(id: &PostId) -> Self {
        Self::PostNotFound { id: id.clone() }
    }
}
