//! Comment operations.

use quill_core::{Comment, CommentId, CommentPatch, CreateCommentInput, IdGenerator};
use quill_integrity::IntegrityRules;
use quill_store::Store;

use crate::error::MutationResult;

/// Create a comment with a fresh id.
///
/// The author must exist and the post must be published; the author is
/// checked first, so that failure wins when both are wrong.
pub fn create_comment(
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    input: CreateCommentInput,
) -> MutationResult<Comment> {
    IntegrityRules::new(store).can_comment(&input.author, &input.post)?;

    let comment = input.into_comment(CommentId::new(ids.next_id()));
    Ok(store.comments_mut().insert(comment)?.clone())
}

/// Apply a sparse patch to a comment.
pub fn update_comment(
    store: &mut Store,
    id: &CommentId,
    patch: CommentPatch,
) -> MutationResult<Comment> {
    let comment = store.comments_mut().find_mut(id)?;
    if let Some(text) = patch.text {
        comment.text = text;
    }
    Ok(comment.clone())
}

/// Remove a single comment. Nothing depends on comments, so there is no
/// cascade.
pub fn delete_comment(store: &mut Store, id: &CommentId) -> MutationResult<Comment> {
    Ok(store.comments_mut().remove(id)?)
}
