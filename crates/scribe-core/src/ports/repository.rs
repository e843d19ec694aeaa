use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, NewUser, Post, PostPatch, User};
use crate::error::RepoError;

/// Post storage.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. The store assigns the id and defaults `created`.
    ///
    /// A post that fails validation is rejected with [`RepoError::Invalid`].
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Write only the fields present in `patch`.
    ///
    /// Returns [`RepoError::NotFound`] when `id` does not resolve.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError>;

    /// Returns [`RepoError::NotFound`] when nothing was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}

/// User storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    ///
    /// Fails with [`RepoError::Constraint`] if the username is taken; an
    /// existing user is never overwritten. Blank credentials are
    /// [`RepoError::Invalid`].
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}
