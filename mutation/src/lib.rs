//! Quill Mutation
//!
//! Execute write operations (create/update/delete of users, posts, comments).
//!
//! Responsibilities:
//! - Validate mutations against the integrity rules before touching the store
//! - Apply mutations to the record store
//! - Handle cascade deletions
//! - Publish comment events
//!
//! # Module Structure
//!
//! - `executor` - Main MutationEngine that coordinates operations
//! - `ops/` - Per-record operation implementations (user, post, comment)
//!   and the shared cascade
//! - `validation` - Shared patch validation helpers
//! - `error` - Error types for mutation failures
//! - `result` - Cascade reports

mod error;
mod executor;
mod ops;
mod result;
mod validation;

pub use error::{MutationError, MutationResult};
pub use executor::MutationEngine;
pub use result::CascadeReport;
