//! A session shared between threads.

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use quill_core::{CommentEvent, PostId};
use quill_subscription::{Broker, CommentAdded};

use crate::config::Config;
use crate::error::SessionResult;
use crate::session::Session;

/// Cloneable handle to one [`Session`].
///
/// Every operation runs under a single lock, so each mutation, cascade
/// included, is observed whole or not at all. Subscription streams are
/// returned without the lock held.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
    broker: Broker<CommentEvent>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        let broker = session.broker().clone();
        Self {
            inner: Arc::new(Mutex::new(session)),
            broker,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Session::new(config))
    }

    /// Hold the lock for several operations in a row.
    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        f(&mut self.inner.lock())
    }

    pub fn comment_added(&self, post: &PostId) -> SessionResult<CommentAdded> {
        self.inner.lock().comment_added(post)
    }

    /// The session's broker, usable without taking the lock.
    pub fn broker(&self) -> &Broker<CommentEvent> {
        &self.broker
    }
}
