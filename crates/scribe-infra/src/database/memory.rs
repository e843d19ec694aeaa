//! In-memory repositories - used when no database is configured and by tests.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{NewPost, NewUser, Post, PostPatch, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};

/// Post store backed by a `HashMap` behind an async `RwLock`.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Drop every stored post.
    pub async fn clear(&self) {
        self.posts.write().await.clear();
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        post.validate()
            .map_err(|e| RepoError::Invalid(e.to_string()))?;

        let post = post.into_post(Uuid::new_v4());
        self.posts.write().await.insert(post.id, post.clone());

        tracing::debug!(post_id = %post.id, "Inserted post");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by_key(|p| p.created);
        Ok(posts)
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<(), RepoError> {
        patch
            .validate()
            .map_err(|e| RepoError::Invalid(e.to_string()))?;

        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(patch);

        tracing::debug!(post_id = %id, "Updated post");
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}

/// User store. Username uniqueness is checked under the same write lock as the insert.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Drop every stored user.
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        user.validate()
            .map_err(|e| RepoError::Invalid(e.to_string()))?;

        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint(format!(
                "username '{}' already exists",
                user.username
            )));
        }

        let user = user.into_user(Uuid::new_v4());
        users.insert(user.id, user.clone());

        tracing::debug!(username = %user.username, "Inserted user");
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.users.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::domain::{Author, AuthorPatch};

    fn sample(title: &str) -> NewPost {
        NewPost::new(title)
            .with_author(Author::new("Jane", "Doe"))
            .with_content("Body text")
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_is_findable() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(sample("First")).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found, post);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_title() {
        let repo = InMemoryPostRepository::new();
        let result = repo.insert(NewPost::new("")).await;
        assert!(matches!(result, Err(RepoError::Invalid(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(sample("First")).await.unwrap();

        repo.update_by_id(
            post.id,
            PostPatch {
                title: Some("Renamed".to_string()),
                author: AuthorPatch {
                    first_name: Some("John".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Renamed");
        assert_eq!(found.author, Author::new("John", "Doe"));
        assert_eq!(found.content, post.content);
        assert_eq!(found.created, post.created);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update_by_id(Uuid::new_v4(), PostPatch::default())
            .await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_then_missing() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(sample("First")).await.unwrap();

        repo.delete_by_id(post.id).await.unwrap();
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete_by_id(post.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_find_all_and_clear() {
        let repo = InMemoryPostRepository::new();
        for i in 0..3 {
            repo.insert(sample(&format!("Post {i}"))).await.unwrap();
        }
        assert_eq!(repo.find_all().await.unwrap().len(), 3);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(NewUser::new("jdoe", "hash-1")).await.unwrap();

        let second = repo.insert(NewUser::new("jdoe", "hash-2")).await;
        assert!(matches!(second, Err(RepoError::Constraint(_))));

        let stored = repo.find_by_username("jdoe").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.password_hash, "hash-1");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_validation_failures_are_not_conflicts() {
        let posts = InMemoryPostRepository::new();
        let post = posts.insert(sample("First")).await.unwrap();
        let blank_title = PostPatch {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            posts.update_by_id(post.id, blank_title).await,
            Err(RepoError::Invalid(_))
        ));

        let users = InMemoryUserRepository::new();
        let result = users.insert(NewUser::new(" ", "hash")).await;
        assert!(matches!(result, Err(RepoError::Invalid(_))));
        assert_eq!(users.count().await.unwrap(), 0);
    }
}
