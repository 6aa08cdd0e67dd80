//! Referential and uniqueness rules on create and update.

use quill_tests::prelude::*;

mod email_uniqueness {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("email_uniqueness")
            .seed(Fixture::new().user("A", "a@x.com"))
            .step(
                "duplicate_email",
                |s| s.create_user(user("B", "a@x.com")),
                |a| a.error("Email already taken: a@x.com").users(1),
            )
            .step(
                "emails_are_case_sensitive",
                |s| s.create_user(user("C", "A@x.com")),
                |a| a.ok().ids(&["2"]).users(2),
            )
            .step(
                "update_to_taken_email",
                |s| s.update_user(&UserId::from("2"), UserPatch::new().email("a@x.com")),
                |a| a.error("Email already taken"),
            )
            .step(
                "update_to_own_email",
                |s| s.update_user(&UserId::from("1"), UserPatch::new().email("a@x.com")),
                |a| a.ok().ids(&["1"]),
            )
    }

    #[test]
    fn test_email_uniqueness() {
        scenario().run().unwrap();
    }
}

mod post_references {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("post_references")
            .seed(Fixture::new().user("A", "a@x.com"))
            .step(
                "missing_author",
                |s| s.create_post(post("T", "B", true, "99")),
                |a| a.error("User not found: 99").posts(0),
            )
            .step(
                "valid_author",
                |s| s.create_post(post("T", "B", false, "1")),
                |a| a.ok().ids(&["2"]).posts(1),
            )
    }

    #[test]
    fn test_post_references() {
        scenario().run().unwrap();
    }
}

mod comment_references {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("comment_references")
            .seed(
                Fixture::new()
                    .user("A", "a@x.com")
                    .post("Draft", "B", false, "1")
                    .post("Live", "B", true, "1"),
            )
            .step(
                "unpublished_post",
                |s| s.create_comment(comment("hi", "1", "2")),
                |a| a.error("Post not published: 2").comments(0),
            )
            .step(
                "missing_post",
                |s| s.create_comment(comment("hi", "1", "99")),
                |a| a.error("Post not published: 99"),
            )
            .step(
                "missing_author_checked_first",
                |s| s.create_comment(comment("hi", "99", "2")),
                |a| a.error("User not found: 99"),
            )
            .step(
                "published_post",
                |s| s.create_comment(comment("hi", "1", "3")),
                |a| a.ok().ids(&["4"]).comments(1),
            )
            .step(
                "publishing_opens_comments",
                |s| s.update_post(&PostId::from("2"), PostPatch::new().published(true)),
                |a| a.ok(),
            )
            .step(
                "comment_on_newly_published",
                |s| s.create_comment(comment("now", "1", "2")),
                |a| a.ok().comments(2),
            )
    }

    #[test]
    fn test_comment_references() {
        scenario().run().unwrap();
    }
}

mod partial_updates {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("partial_updates")
            .seed(
                Fixture::new()
                    .user_aged("A", "a@x.com", 30)
                    .user("B", "b@x.com"),
            )
            .step(
                "rename_only",
                |s| s.update_user(&UserId::from("1"), UserPatch::new().name("Ann")),
                |a| {
                    a.ok().check(|o| {
                        matches!(o, Outcome::User(u) if u.name == "Ann" && u.age == Some(30) && u.email == "a@x.com")
                    })
                },
            )
            .step(
                "clear_age",
                |s| s.update_user(&UserId::from("1"), UserPatch::new().age(None)),
                |a| a.ok().check(|o| matches!(o, Outcome::User(u) if u.age.is_none())),
            )
            .step(
                "rejected_update_writes_nothing",
                |s| {
                    s.update_user(
                        &UserId::from("1"),
                        UserPatch::new().name("Changed").email("b@x.com"),
                    )
                },
                |a| a.error("Email already taken"),
            )
            .step(
                "name_kept",
                |s| s.user(&UserId::from("1")).map(Outcome::from),
                |a| a.check(|o| matches!(o, Outcome::User(u) if u.name == "Ann")),
            )
            .step(
                "missing_user",
                |s| s.update_user(&UserId::from("9"), UserPatch::new().name("X")),
                |a| a.error("user not found: 9"),
            )
            .step(
                "missing_post",
                |s| s.update_post(&PostId::from("9"), PostPatch::new().title("X")),
                |a| a.error("post not found: 9").posts(0),
            )
            .step(
                "missing_comment",
                |s| s.update_comment(&CommentId::from("9"), CommentPatch::new().text("X")),
                |a| a.error("comment not found: 9").comments(0),
            )
    }

    #[test]
    fn test_partial_updates() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_patch_from_json_distinguishes_null_from_absent() {
    let mut session = Fixture::new()
        .user_aged("A", "a@x.com", 30)
        .build()
        .unwrap();

    let untouched: UserPatch = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
    let cleared: UserPatch = serde_json::from_str(r#"{"age":null}"#).unwrap();

    let after_rename = session.update_user(&UserId::from("1"), untouched).unwrap();
    assert_eq!(after_rename.age, Some(30));

    let after_clear = session.update_user(&UserId::from("1"), cleared).unwrap();
    assert_eq!(after_clear.age, None);
    assert_eq!(after_clear.name, "B");
}

#[test]
fn test_reopened_store_accepts_new_records() {
    // GIVEN a seeded store moved into a new session
    let seeded = Fixture::new()
        .user("A", "a@x.com")
        .post("T", "B", true, "1")
        .build()
        .unwrap();
    let mut session = Session::with_store(&Fixture::config(), seeded.store().clone());

    // WHEN
    let bo = session.create_user(user("Bo", "bo@x.com")).unwrap();
    let remark = session.create_comment(comment("hi", bo.id.as_str(), "2")).unwrap();

    // THEN
    assert_eq!(bo.id.as_str(), "3");
    assert_eq!(remark.id.as_str(), "4");
}
