//! Random mutation sequences never leave the store inconsistent.

use quill_integrity::audit;
use quill_tests::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STEPS: usize = 400;

/// One of `ids`, or an unknown id now and then.
fn pick<R: Rng>(rng: &mut R, ids: &[String]) -> String {
    if ids.is_empty() || rng.gen_bool(0.1) {
        return "missing".to_string();
    }
    ids[rng.gen_range(0..ids.len())].clone()
}

fn ids(session: &Session) -> (Vec<String>, Vec<String>, Vec<String>) {
    (
        session.users(None).iter().map(|u| u.id.to_string()).collect(),
        session.posts(None).iter().map(|p| p.id.to_string()).collect(),
        session.comments().iter().map(|c| c.id.to_string()).collect(),
    )
}

type Snapshot = (Vec<User>, Vec<Post>, Vec<Comment>);

fn snapshot(session: &Session) -> Snapshot {
    (
        session.users(None).into_iter().cloned().collect(),
        session.posts(None).into_iter().cloned().collect(),
        session.comments().into_iter().cloned().collect(),
    )
}

fn walk(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Fixture::new().build().unwrap();

    for step in 0..STEPS {
        let (users, posts, comments) = ids(&session);
        let before = snapshot(&session);

        let result = match rng.gen_range(0..12) {
            0 | 1 => {
                // Small email pool so collisions happen.
                let email = format!("u{}@x.com", rng.gen_range(0..12));
                session.create_user(user("u", &email)).map(|_| ())
            }
            2 | 3 => {
                let author = pick(&mut rng, &users);
                let published = rng.gen_bool(0.7);
                session
                    .create_post(post("t", "b", published, &author))
                    .map(|_| ())
            }
            4 | 5 => {
                let author = pick(&mut rng, &users);
                let on = pick(&mut rng, &posts);
                session.create_comment(comment("c", &author, &on)).map(|_| ())
            }
            6 => {
                // A colliding email must not leave the new name behind.
                let id = pick(&mut rng, &users);
                let email = format!("u{}@x.com", rng.gen_range(0..12));
                let name = format!("n{step}");
                session
                    .update_user(&UserId::from(id), UserPatch::new().name(name).email(email))
                    .map(|_| ())
            }
            7 => {
                let id = pick(&mut rng, &posts);
                let patch = PostPatch::new()
                    .title(format!("t{step}"))
                    .published(rng.gen_bool(0.5));
                session.update_post(&PostId::from(id), patch).map(|_| ())
            }
            8 => {
                let id = pick(&mut rng, &comments);
                let patch = CommentPatch::new().text(format!("c{step}"));
                session.update_comment(&CommentId::from(id), patch).map(|_| ())
            }
            9 | 10 => {
                if rng.gen_bool(0.5) {
                    session.delete_user(&UserId::from(pick(&mut rng, &users))).map(|_| ())
                } else {
                    session.delete_post(&PostId::from(pick(&mut rng, &posts))).map(|_| ())
                }
            }
            _ => session
                .delete_comment(&CommentId::from(pick(&mut rng, &comments)))
                .map(|_| ()),
        };

        let violations = audit(session.store());
        assert!(
            violations.is_empty(),
            "seed {seed} step {step}: {violations:?}"
        );
        if result.is_err() {
            assert!(
                snapshot(&session) == before,
                "seed {seed} step {step}: rejected mutation changed the store"
            );
        }
    }
}

#[test]
fn test_random_walks_stay_consistent() {
    for seed in [1, 7, 42, 1234, 99_999] {
        walk(seed);
    }
}
