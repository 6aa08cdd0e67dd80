//! Comment subscriptions end to end.

use pretty_assertions::assert_eq;
use quill_core::MutationKind;
use quill_tests::prelude::*;

fn published() -> Session {
    // 1 Ann, 2 published post, 3 draft
    Fixture::new()
        .user("Ann", "ann@x.com")
        .post("Live", "B", true, "1")
        .post("Draft", "B", false, "1")
        .build()
        .unwrap()
}

#[test]
fn test_subscription_refused_for_draft_and_missing_post() {
    let session = published();

    for id in ["3", "404"] {
        let err = session.comment_added(&PostId::from(id)).unwrap_err();
        assert_eq!(err.to_string(), format!("subscription error: Post not found: {id}"));
    }
    assert_eq!(session.broker().topic_count(), 0);
}

#[tokio::test]
async fn test_subscriber_receives_new_comments_for_its_post_only() {
    // GIVEN a subscriber on post 2 and a second published post 4
    let mut session = published();
    session.create_post(post("Other", "B", true, "1")).unwrap();
    let mut added = session.comment_added(&PostId::from("2")).unwrap();

    // WHEN comments land on both posts
    session.create_comment(comment("elsewhere", "1", "4")).unwrap();
    let mine = session.create_comment(comment("mine", "1", "2")).unwrap();

    // THEN only the comment on post 2 arrives
    assert_eq!(added.next().await, Some(mine));
    assert_eq!(added.try_next(), None);
}

#[tokio::test]
async fn test_stream_ends_when_session_drops() {
    let session = published();
    let mut added = session.comment_added(&PostId::from("2")).unwrap();

    drop(session);

    assert_eq!(added.next().await, None);
}

#[test]
fn test_event_stream_carries_edits_and_cascades() {
    // GIVEN
    let mut session = published();
    let mut events = session.subscribe_comments(&PostId::from("2")).unwrap();

    // WHEN a comment is created, edited, and removed by deleting its author
    let created = session.create_comment(comment("hi", "1", "2")).unwrap();
    session
        .update_comment(&created.id, CommentPatch::new().text("edited"))
        .unwrap();
    session.delete_user(&UserId::from("1")).unwrap();

    // THEN
    let seen: Vec<(MutationKind, String)> = events
        .drain()
        .into_iter()
        .map(|e| (e.mutation, e.data.text))
        .collect();
    assert_eq!(
        seen,
        vec![
            (MutationKind::Created, "hi".to_string()),
            (MutationKind::Updated, "edited".to_string()),
            (MutationKind::Deleted, "edited".to_string()),
        ]
    );
}

#[test]
fn test_unpublishing_does_not_close_open_streams() {
    let mut session = published();
    let mut added = session.comment_added(&PostId::from("2")).unwrap();

    let before = session.create_comment(comment("a", "1", "2")).unwrap();
    session
        .update_post(&PostId::from("2"), PostPatch::new().published(false))
        .unwrap();

    assert_eq!(added.try_next(), Some(before));
    assert!(session.comment_added(&PostId::from("2")).is_err());
    assert!(session.create_comment(comment("b", "1", "2")).is_err());
}

#[test]
fn test_event_payload_serializes_for_the_wire() {
    let mut session = published();
    let mut events = session.subscribe_comments(&PostId::from("2")).unwrap();
    session.create_comment(comment("hi", "1", "2")).unwrap();

    let event = events.try_next().unwrap();
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["mutation"], "CREATED");
    assert_eq!(json["data"]["text"], "hi");
    assert_eq!(json["data"]["post"], "2");
}
