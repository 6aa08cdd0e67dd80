//! Patch validation helpers for mutation operations.
//!
//! Everything here runs before a record is written, so a rejected patch
//! leaves the record untouched.

use quill_core::{UserId, UserPatch};
use quill_integrity::IntegrityRules;

use crate::error::MutationResult;

/// Validate a user patch against the store.
///
/// Only the email carries a cross-record rule. Setting a user's email to the
/// value it already has is accepted.
pub fn validate_user_patch(
    rules: &IntegrityRules<'_>,
    user: &UserId,
    patch: &UserPatch,
) -> MutationResult<()> {
    if let Some(email) = &patch.email {
        rules.email_available_for(user, email)?;
    }
    Ok(())
}
