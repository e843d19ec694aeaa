//! Post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use scribe_core::domain::{Author, AuthorPatch, NewPost, PostPatch, parse_id};
use scribe_core::error::{DomainError, RepoError};
use scribe_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::repr::ApiRepr;
use crate::state::AppState;

fn post_not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    }
    .into()
}

/// Store errors with `NotFound` reported against the post id.
fn for_post(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => post_not_found(id),
        other => other.into(),
    }
}

fn new_post_from(req: CreatePostRequest) -> Result<NewPost, AppError> {
    let title = req
        .title
        .ok_or_else(|| AppError::BadRequest("Missing `title` in request body".to_string()))?;
    let author = req.author.unwrap_or_default();

    let mut post = NewPost::new(title).with_author(Author::new(
        author.first_name.unwrap_or_default(),
        author.last_name.unwrap_or_default(),
    ));
    post.content = req.content;

    post.validate()?;
    Ok(post)
}

fn patch_from(req: UpdatePostRequest) -> Result<PostPatch, AppError> {
    let author = req.author.unwrap_or_default();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: AuthorPatch {
            first_name: author.first_name,
            last_name: author.last_name,
        },
    };

    patch.validate()?;
    Ok(patch)
}

/// GET /posts
#[tracing::instrument(skip(state))]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(|p| p.api_repr()).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
#[tracing::instrument(skip(state))]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post.api_repr()))
}

/// POST /posts
#[tracing::instrument(skip(state, body))]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = new_post_from(body.into_inner())?;
    let post = state.posts.insert(new_post).await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post.api_repr()))
}

/// PUT /posts/{id}
#[tracing::instrument(skip(state, body))]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = &req.id {
        if parse_id(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let patch = patch_from(req)?;
    state.posts.update_by_id(id, patch).await.map_err(for_post(id))?;

    tracing::info!(post_id = %id, "Post updated");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Unknown ids answer 404 rather than being treated as already deleted.
#[tracing::instrument(skip(state))]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete_by_id(id).await.map_err(for_post(id))?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
