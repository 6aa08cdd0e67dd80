//! Quill Subscription
//!
//! Topic-routed event delivery and the gate that opens comment streams.
//!
//! Responsibilities:
//! - Route published events to the subscribers of a topic
//! - Hand out per-subscriber streams that survive slow consumers
//! - Refuse streams for posts that are missing or unpublished
//!
//! # Module Structure
//!
//! - `topic` - Routing keys derived from record ids
//! - `broker` - In-process publish/subscribe over broadcast channels
//! - `stream` - Subscriber side of a topic
//! - `gate` - Authorization of comment subscriptions
//! - `error` - Error types for refused subscriptions

mod broker;
mod error;
mod gate;
mod stream;
mod topic;

pub use broker::{Broker, Publish, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use error::{SubscriptionError, SubscriptionResult};
pub use gate::{CommentAdded, SubscriptionGate};
pub use stream::EventStream;
pub use topic::Topic;
