//! Mutation operation implementations.
//!
//! Each record kind has its own module; `cascade` holds the removal logic
//! shared by the delete operations.

mod cascade;
mod comment;
mod post;
mod user;

pub use cascade::{remove_post, remove_user};
pub use comment::{create_comment, delete_comment, update_comment};
pub use post::{create_post, update_post};
pub use user::{create_user, update_user};
