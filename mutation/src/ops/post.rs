//! Post operations.

use quill_core::{CreatePostInput, IdGenerator, Post, PostId, PostPatch};
use quill_integrity::IntegrityRules;
use quill_store::Store;

use crate::error::MutationResult;

/// Create a post with a fresh id; the author must exist.
pub fn create_post(
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    input: CreatePostInput,
) -> MutationResult<Post> {
    IntegrityRules::new(store).user_exists(&input.author)?;

    let post = input.into_post(PostId::new(ids.next_id()));
    Ok(store.posts_mut().insert(post)?.clone())
}

/// Apply a sparse patch to a post.
///
/// Unpublishing leaves existing comments in place.
pub fn update_post(store: &mut Store, id: &PostId, patch: PostPatch) -> MutationResult<Post> {
    let post = store.posts_mut().find_mut(id)?;
    if let Some(title) = patch.title {
        post.title = title;
    }
    if let Some(body) = patch.body {
        post.body = body;
    }
    if let Some(published) = patch.published {
        post.published = published;
    }
    Ok(post.clone())
}
