//! Event routing keys.

use quill_core::PostId;
use std::fmt;

/// Key routing published events to matching subscribers.
///
/// Derived deterministically from a record id, so a publisher and a
/// subscriber that name the same post always meet on the same topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic {
    channel: &'static str,
    key: String,
}

impl Topic {
    /// Comment events for one post.
    pub fn comment(post: &PostId) -> Self {
        Self {
            channel: "comment",
            key: post.as_str().to_string(),
        }
    }

    pub fn channel(&self) -> &'static str {
        self.channel
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.channel, self.key)
    }
}
