//! User resource handlers.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use scribe_core::domain::NewUser;
use scribe_core::error::{DomainError, RepoError};
use scribe_shared::dto::CreateUserRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::repr::ApiRepr;
use crate::state::AppState;

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing `{}` in request body", field)))
}

/// POST /users
///
/// The plaintext password only ever reaches the password service.
#[tracing::instrument(skip(state, body))]
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let username = required(req.username, "username")?.trim().to_string();
    let password = required(req.password, "password")?;

    // Argon2 is CPU bound; keep it off the async workers.
    let passwords = Arc::clone(&state.passwords);
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let new_user = NewUser::new(username.clone(), password_hash).with_names(
        req.first_name.unwrap_or_default(),
        req.last_name.unwrap_or_default(),
    );

    let user = state.users.insert(new_user).await.map_err(|err| match err {
        RepoError::Constraint(_) => AppError::from(DomainError::Duplicate(format!(
            "Username '{}' is already taken",
            username
        ))),
        other => other.into(),
    })?;

    tracing::info!(username = %user.username, "User created");
    Ok(HttpResponse::Created().json(user.api_repr()))
}
