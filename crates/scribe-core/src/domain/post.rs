use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Byline of a post. Both halves default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// First and last name joined by a space, surrounding whitespace trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Post entity - a blog post as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Derived on every read, never stored.
    pub fn author_name(&self) -> String {
        self.author.full_name()
    }

    /// Apply a partial update in place. Fields absent from the patch are kept.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
        if let Some(first_name) = patch.author.first_name {
            self.author.first_name = first_name;
        }
        if let Some(last_name) = patch.author.last_name {
            self.author.last_name = last_name;
        }
    }
}

/// Input for creating a post. The store assigns `id` and defaults `created`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            author: Author::default(),
            title: title.into(),
            content: None,
            created: None,
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        Ok(())
    }

    /// Materialize the post under a store-assigned id.
    pub fn into_post(self, id: Uuid) -> Post {
        Post {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial update of a post. `None` means "leave untouched".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: AuthorPatch,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.first_name.is_none()
            && self.author.last_name.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err(DomainError::Validation(
                "title cannot be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
