//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Author, AuthorPatch, NewPost, Post, PostPatch};
pub use user::{NewUser, User};

use uuid::Uuid;

use crate::error::DomainError;

/// Parse a client-supplied identifier.
pub fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::InvalidId(raw.to_string()))
}
