//! Handlers for the user resource.
//!
//! Each handler performs exactly one service call. Request validation runs
//! before these handlers, see [`crate::api::middleware::validation`].

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::user::{
    CreateUserRequest, CreatedResponse, PatchUserRequest, ReplaceUserRequest, UserResponse,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every user.
///
/// # Endpoint
///
/// `GET /users`
///
/// Returns all users in creation order. There is no pagination.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "a@x.com",
///   "password": "secret",
///   "firstName": "Ada",       // optional
///   "lastName": "Lovelace",   // optional
///   "permissionLevel": 1      // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"id": "..."}`.
pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Returns one user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(&id).await?;

    Ok(Json(user.into()))
}

/// Replaces a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// The body must carry the complete record. The id is taken from the path and
/// the email must equal the stored one. Optional fields left out are cleared.
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
pub async fn replace_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ReplaceUserRequest>,
) -> Result<StatusCode, AppError> {
    state
        .user_service
        .replace_user(payload.into_user(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /users/{id}`
///
/// Only `password`, `firstName`, `lastName`, and `permissionLevel` are
/// applied. `null` clears an optional field. Other keys are ignored. An
/// empty body is a no-op patch.
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
pub async fn patch_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PatchUserRequest>,
) -> Result<StatusCode, AppError> {
    state.user_service.patch_user(&id, payload.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
