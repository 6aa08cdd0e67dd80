//! Cascading removal of users and posts.
//!
//! Once the root record is found nothing here can fail: the cascade only
//! removes records, it never validates.

use quill_core::{Post, PostId, User, UserId};
use quill_store::Store;

use crate::error::MutationResult;
use crate::result::CascadeReport;

/// Remove a post and every comment attached to it.
pub fn remove_post(store: &mut Store, id: &PostId) -> MutationResult<(Post, CascadeReport)> {
    let post = store.posts_mut().remove(id)?;
    let comments = store.comments_mut().remove_where(|c| c.is_on(&post.id));
    Ok((post, CascadeReport::comments(comments)))
}

/// Remove a user, the posts it wrote with their comments, and then every
/// other comment it wrote.
pub fn remove_user(store: &mut Store, id: &UserId) -> MutationResult<(User, CascadeReport)> {
    let user = store.users_mut().remove(id)?;
    let mut report = CascadeReport::new();

    let posts = store.posts_mut().remove_where(|p| p.is_by(&user.id));
    for post in &posts {
        let comments = store.comments_mut().remove_where(|c| c.is_on(&post.id));
        report.comments.extend(comments);
    }
    report.posts = posts;

    let authored = store.comments_mut().remove_where(|c| c.is_by(&user.id));
    report.comments.extend(authored);

    Ok((user, report))
}
