//! User operations.

use quill_core::{CreateUserInput, IdGenerator, User, UserId, UserPatch};
use quill_integrity::IntegrityRules;
use quill_store::Store;

use crate::error::MutationResult;
use crate::validation;

/// Create a user with a fresh id, rejecting a taken email.
pub fn create_user(
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    input: CreateUserInput,
) -> MutationResult<User> {
    IntegrityRules::new(store).email_available(&input.email)?;

    let user = input.into_user(UserId::new(ids.next_id()));
    Ok(store.users_mut().insert(user)?.clone())
}

/// Apply a sparse patch to a user.
///
/// The whole patch is validated first; on rejection no field changes.
pub fn update_user(store: &mut Store, id: &UserId, patch: UserPatch) -> MutationResult<User> {
    store.users().find(id)?;
    validation::validate_user_patch(&IntegrityRules::new(store), id, &patch)?;

    let user = store.users_mut().find_mut(id)?;
    if let Some(name) = patch.name {
        user.name = name;
    }
    if let Some(email) = patch.email {
        user.email = email;
    }
    if let Some(age) = patch.age {
        user.age = age;
    }
    Ok(user.clone())
}
