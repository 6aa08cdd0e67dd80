//! Quill Integrity
//!
//! Referential-integrity and uniqueness rules consulted before mutations.
//!
//! Responsibilities:
//! - Decide whether an email is free
//! - Decide whether referenced users and posts exist
//! - Decide whether a post accepts comments (exists and is published)
//! - Audit a whole store for invariant breaches
//!
//! Every rule is a pure read of the store. Nothing here mutates.

mod audit;
mod error;
mod rules;

pub use audit::{audit, Violation};
pub use error::{IntegrityResult, Rejection};
pub use rules::IntegrityRules;
