//! Quill Record Store
//!
//! This crate provides the in-memory record storage:
//! - One insertion-ordered collection per record kind
//! - Insert, find, filter and remove primitives
//! - Bulk removal used by cascading deletes
//!
//! The store is the sole owner of all records. Nothing else keeps a
//! long-lived reference; readers borrow `&Store`, writers `&mut Store`.

mod collection;
mod error;
mod store;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use store::Store;
