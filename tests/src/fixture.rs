//! Seed data for scenarios.

use quill_core::{CreateCommentInput, CreatePostInput, CreateUserInput, PostId, UserId};
use quill_session::{Config, IdStrategy, Session, SessionResult};

/// Input for a user without an age.
pub fn user(name: &str, email: &str) -> CreateUserInput {
    CreateUserInput::new(name, email)
}

/// Input for a post by `author`.
pub fn post(title: &str, body: &str, published: bool, author: &str) -> CreatePostInput {
    CreatePostInput::new(title, body, published, UserId::from(author))
}

/// Input for a comment by `author` on `post`.
pub fn comment(text: &str, author: &str, post: &str) -> CreateCommentInput {
    CreateCommentInput::new(text, UserId::from(author), PostId::from(post))
}

#[derive(Debug, Clone)]
enum Seed {
    User(CreateUserInput),
    Post(CreatePostInput),
    Comment(CreateCommentInput),
}

/// Records created, in order, through the normal mutation path.
///
/// Ids are sequential across all three kinds: the first record seeded is
/// `"1"`, the second `"2"`, and so on.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    seeds: Vec<Seed>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, name: &str, email: &str) -> Self {
        self.seeds.push(Seed::User(user(name, email)));
        self
    }

    pub fn user_aged(mut self, name: &str, email: &str, age: i64) -> Self {
        self.seeds.push(Seed::User(user(name, email).with_age(age)));
        self
    }

    pub fn post(mut self, title: &str, body: &str, published: bool, author: &str) -> Self {
        self.seeds
            .push(Seed::Post(post(title, body, published, author)));
        self
    }

    pub fn comment(mut self, text: &str, author: &str, post: &str) -> Self {
        self.seeds.push(Seed::Comment(comment(text, author, post)));
        self
    }

    /// Number of records this fixture creates.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// A fresh sequential-id session holding the seeded records.
    pub fn build(&self) -> SessionResult<Session> {
        let mut session = Session::new(&Self::config());
        self.apply(&mut session)?;
        Ok(session)
    }

    /// Create the seeded records in `session`.
    pub fn apply(&self, session: &mut Session) -> SessionResult<()> {
        for seed in &self.seeds {
            match seed.clone() {
                Seed::User(input) => {
                    session.create_user(input)?;
                }
                Seed::Post(input) => {
                    session.create_post(input)?;
                }
                Seed::Comment(input) => {
                    session.create_comment(input)?;
                }
            }
        }
        Ok(())
    }

    pub fn config() -> Config {
        Config {
            id_strategy: IdStrategy::Sequential,
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ids_follow_creation_order() {
        let session = Fixture::new()
            .user("Ann", "ann@x.com")
            .post("T", "B", true, "1")
            .comment("hi", "1", "2")
            .build()
            .unwrap();

        assert_eq!(session.user(&UserId::from("1")).unwrap().name, "Ann");
        assert_eq!(session.post(&PostId::from("2")).unwrap().title, "T");
        assert_eq!(session.comments().len(), 1);
    }

    #[test]
    fn test_invalid_seed_is_reported() {
        let result = Fixture::new().post("T", "B", true, "ghost").build();

        assert!(result.is_err());
    }
}
