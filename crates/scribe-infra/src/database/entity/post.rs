//! Post entity for SeaORM.

use sea_orm::ActiveValue;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use scribe_core::domain::{Author, PostPatch};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_first_name: String,
    pub author_last_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for scribe_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: Author::new(model.author_first_name, model.author_last_name),
            title: model.title,
            content: model.content,
            created: model.created.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<scribe_core::domain::Post> for ActiveModel {
    fn from(post: scribe_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author_first_name: Set(post.author.first_name),
            author_last_name: Set(post.author.last_name),
            title: Set(post.title),
            content: Set(post.content),
            created: Set(post.created.into()),
        }
    }
}

/// Only the columns supplied by the patch are marked as set.
impl From<PostPatch> for ActiveModel {
    fn from(patch: PostPatch) -> Self {
        Self {
            id: ActiveValue::NotSet,
            author_first_name: set_if_present(patch.author.first_name),
            author_last_name: set_if_present(patch.author.last_name),
            title: set_if_present(patch.title),
            content: match patch.content {
                Some(content) => Set(Some(content)),
                None => ActiveValue::NotSet,
            },
            created: ActiveValue::NotSet,
        }
    }
}

fn set_if_present(value: Option<String>) -> ActiveValue<String> {
    match value {
        Some(v) => Set(v),
        None => ActiveValue::NotSet,
    }
}
