//! Session manager.

use quill_core::{
    Comment, CommentEvent, CommentId, CommentPatch, CreateCommentInput, CreatePostInput,
    CreateUserInput, IdGenerator, Post, PostId, PostPatch, User, UserId, UserPatch,
};
use quill_mutation::{MutationEngine, MutationResult};
use quill_query::{QueryResolver, RelationResolver};
use quill_store::Store;
use quill_subscription::{Broker, CommentAdded, EventStream, SubscriptionGate};
use tracing::warn;

use crate::config::Config;
use crate::error::SessionResult;

/// One data set with its id source and comment event broker.
pub struct Session {
    store: Store,
    ids: Box<dyn IdGenerator + Send>,
    broker: Broker<CommentEvent>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .field("broker", &self.broker)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    /// Create an empty session.
    pub fn new(config: &Config) -> Self {
        Self::with_store(config, Store::new())
    }

    /// Create an empty session drawing ids from `ids`.
    pub fn with_ids(config: &Config, ids: Box<dyn IdGenerator + Send>) -> Self {
        Self {
            store: Store::new(),
            ids,
            broker: Broker::new(config.event_capacity),
        }
    }

    /// Create a session around an existing store.
    ///
    /// Sequential ids continue after the highest numeric id in `store`.
    pub fn with_store(config: &Config, store: Store) -> Self {
        let ids = config.id_strategy.generator(&store);
        Self {
            store,
            ids,
            broker: Broker::new(config.event_capacity),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The comment event broker. Clones share its channels.
    pub fn broker(&self) -> &Broker<CommentEvent> {
        &self.broker
    }

    // ==================== Queries ====================

    pub fn query(&self) -> QueryResolver<'_> {
        QueryResolver::new(&self.store)
    }

    pub fn relations(&self) -> RelationResolver<'_> {
        RelationResolver::new(&self.store)
    }

    /// Users whose name contains `query`, case-insensitively; all when `None`.
    pub fn users(&self, query: Option<&str>) -> Vec<&User> {
        self.query().users(query)
    }

    /// Posts whose title or body contains `query`; all when `None`.
    pub fn posts(&self, query: Option<&str>) -> Vec<&Post> {
        self.query().posts(query)
    }

    pub fn comments(&self) -> Vec<&Comment> {
        self.query().comments()
    }

    pub fn user(&self, id: &UserId) -> SessionResult<&User> {
        Ok(self.query().user(id)?)
    }

    pub fn post(&self, id: &PostId) -> SessionResult<&Post> {
        Ok(self.query().post(id)?)
    }

    pub fn comment(&self, id: &CommentId) -> SessionResult<&Comment> {
        Ok(self.query().comment(id)?)
    }

    // ==================== Mutations ====================

    /// A mutation engine over this session's store, publishing to its broker.
    pub fn engine(&mut self) -> MutationEngine<'_> {
        MutationEngine::new(&mut self.store, &mut *self.ids).with_events(&self.broker)
    }

    pub fn create_user(&mut self, input: CreateUserInput) -> SessionResult<User> {
        logged("createUser", self.engine().create_user(input))
    }

    pub fn update_user(&mut self, id: &UserId, patch: UserPatch) -> SessionResult<User> {
        logged("updateUser", self.engine().update_user(id, patch))
    }

    pub fn delete_user(&mut self, id: &UserId) -> SessionResult<User> {
        logged("deleteUser", self.engine().delete_user(id))
    }

    pub fn create_post(&mut self, input: CreatePostInput) -> SessionResult<Post> {
        logged("createPost", self.engine().create_post(input))
    }

    pub fn update_post(&mut self, id: &PostId, patch: PostPatch) -> SessionResult<Post> {
        logged("updatePost", self.engine().update_post(id, patch))
    }

    pub fn delete_post(&mut self, id: &PostId) -> SessionResult<Post> {
        logged("deletePost", self.engine().delete_post(id))
    }

    pub fn create_comment(&mut self, input: CreateCommentInput) -> SessionResult<Comment> {
        logged("createComment", self.engine().create_comment(input))
    }

    pub fn update_comment(
        &mut self,
        id: &CommentId,
        patch: CommentPatch,
    ) -> SessionResult<Comment> {
        logged("updateComment", self.engine().update_comment(id, patch))
    }

    pub fn delete_comment(&mut self, id: &CommentId) -> SessionResult<Comment> {
        logged("deleteComment", self.engine().delete_comment(id))
    }

    // ==================== Subscriptions ====================

    /// Comments added to `post` from now on. Refused unless it is published.
    pub fn comment_added(&self, post: &PostId) -> SessionResult<CommentAdded> {
        Ok(SubscriptionGate::new(&self.store, &self.broker).comment_added(post)?)
    }

    /// Every comment event on `post`, deletions and edits included.
    pub fn subscribe_comments(&self, post: &PostId) -> SessionResult<EventStream<CommentEvent>> {
        Ok(SubscriptionGate::new(&self.store, &self.broker).authorize(post)?)
    }
}

fn logged<T>(operation: &'static str, result: MutationResult<T>) -> SessionResult<T> {
    result.map_err(|err| {
        warn!(operation, error = %err, "mutation rejected");
        err.into()
    })
}
