//! Quill Core Types
//!
//! This crate provides the foundational types used throughout Quill:
//! - Identity types (UserId, PostId, CommentId) and id generation
//! - Record structures (User, Post, Comment)
//! - Mutation arguments (create inputs and sparse patches)
//! - Comment events

mod entity;
mod event;
mod id;
mod input;

pub use entity::*;
pub use event::*;
pub use id::*;
pub use input::*;
