//! SeaORM entities backing the `posts` and `users` tables.

pub mod post;
pub mod user;
