//! Shared harness for the HTTP integration suites.
//!
//! Each test builds its own [`TestContext`]: fresh in-memory stores behind an
//! [`AppState`], seeded with random posts and wiped again on teardown.

// Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use scribe_core::domain::{Author, NewPost, Post};
use scribe_core::ports::PostRepository;
use scribe_infra::{Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository};
use scribe_shared::dto::{AuthorInput, CreatePostRequest};

use api_server::AppState;

/// Number of posts seeded before each post test.
pub const SEED_POST_COUNT: usize = 10;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "commodo", "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances", "Ken", "Margaret", "Niklaus",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen", "Thompson",
    "Hamilton", "Wirth",
];

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap()
}

fn words(rng: &mut impl Rng, min: usize, max: usize) -> String {
    let count = rng.gen_range(min..=max);
    (0..count)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random sentence-like title.
pub fn fake_title() -> String {
    let mut rng = rand::thread_rng();
    let mut title = words(&mut rng, 3, 8);
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    title.push('.');
    title
}

/// Random paragraph of a few sentences.
pub fn fake_paragraph() -> String {
    let mut rng = rand::thread_rng();
    let sentences = rng.gen_range(2..=5);
    (0..sentences)
        .map(|_| format!("{}.", words(&mut rng, 6, 14)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn fake_author() -> Author {
    let mut rng = rand::thread_rng();
    Author::new(pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES))
}

/// Random post ready for direct insertion into the store.
pub fn generate_post_data() -> NewPost {
    NewPost::new(fake_title())
        .with_author(fake_author())
        .with_content(fake_paragraph())
}

/// Random create payload as a client would send it.
pub fn generate_post_payload() -> CreatePostRequest {
    let author = fake_author();
    CreatePostRequest {
        title: Some(fake_title()),
        content: Some(fake_paragraph()),
        author: Some(AuthorInput {
            first_name: Some(author.first_name),
            last_name: Some(author.last_name),
        }),
    }
}

/// Scoped store handle plus the application state built on it.
pub struct TestContext {
    pub posts: Arc<InMemoryPostRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub state: AppState,
}

impl TestContext {
    pub fn setup() -> Self {
        let posts = Arc::new(InMemoryPostRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let state = AppState::new(
            posts.clone(),
            users.clone(),
            Arc::new(Argon2PasswordService::new()),
        );

        Self {
            posts,
            users,
            state,
        }
    }

    /// Setup followed by seeding [`SEED_POST_COUNT`] random posts.
    pub async fn seeded() -> Self {
        let ctx = Self::setup();
        ctx.seed_posts(SEED_POST_COUNT).await;
        ctx
    }

    pub async fn seed_posts(&self, count: usize) -> Vec<Post> {
        let mut seeded = Vec::with_capacity(count);
        for _ in 0..count {
            seeded.push(self.posts.insert(generate_post_data()).await.unwrap());
        }
        seeded
    }

    /// Any stored post, the way a test would grab "one" from the collection.
    pub async fn any_post(&self) -> Post {
        self.posts
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .next()
            .expect("store was not seeded")
    }

    pub async fn teardown(self) {
        self.posts.clear().await;
        self.users.clear().await;
    }
}

/// Initialise the full application against a [`TestContext`].
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.state.clone()))
                .configure(api_server::handlers::configure_routes),
        )
        .await
    };
}
