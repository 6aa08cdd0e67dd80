//! Quill Session
//!
//! The resolver surface handed to the protocol layer.
//!
//! A [`Session`] owns the record store, the id generator and the comment
//! event broker, and exposes the queries, mutations and subscriptions over
//! them. [`SharedSession`] puts a session behind a mutex for hosts that run
//! resolvers on several threads.

mod config;
mod error;
mod session;
mod shared;
pub mod telemetry;

pub use config::{Config, ConfigError, IdStrategy};
pub use error::{SessionError, SessionResult};
pub use session::Session;
pub use shared::SharedSession;
