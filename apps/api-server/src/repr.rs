//! Mapping from stored entities to their public JSON shape.

use serde::Serialize;

use scribe_core::domain::{Post, User};
use scribe_shared::dto::{PostResponse, UserResponse};

/// Pure projection of an entity onto its API representation.
pub trait ApiRepr {
    type Repr: Serialize;

    fn api_repr(&self) -> Self::Repr;
}

impl ApiRepr for Post {
    type Repr = PostResponse;

    fn api_repr(&self) -> PostResponse {
        PostResponse {
            id: self.id,
            author: self.author_name(),
            content: self.content.clone(),
            title: self.title.clone(),
            created: self.created,
        }
    }
}

impl ApiRepr for User {
    type Repr = UserResponse;

    fn api_repr(&self) -> UserResponse {
        UserResponse {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
