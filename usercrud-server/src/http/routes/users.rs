//! User endpoints
//!
//! `GET /users`, `GET /user/{id}`, `POST /user`, `PUT /user/{id}`,
//! `DELETE /user/{id}`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{UserId, UserPayload, UserResponse};

/// GET /users - every row, `[]` when the table is empty
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.deadline(state.store.list()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /user/{id} - a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    // A non-numeric key can never match a row
    let id = UserId::parse(&id).map_err(|e| {
        tracing::debug!(raw = %id, reason = %e, "read with unparsable id");
        ApiError::NotFound
    })?;

    let user = state
        .deadline(state.store.get(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /user - insert and return the stored row
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.deadline(state.store.create(&payload)).await?;
    tracing::debug!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /user/{id} - overwrite name and email, then re-read
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = UserId::parse(&id).map_err(|e| {
        tracing::debug!(raw = %id, reason = %e, "update with unparsable id");
        ApiError::InvalidUserId
    })?;

    let affected = state.deadline(state.store.update(id, &payload)).await?;
    tracing::debug!(%id, affected, "user updated");

    let user = state
        .deadline(state.store.get(id))
        .await?
        .ok_or(ApiError::MissingAfterWrite { id })?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /user/{id} - 204 whether or not a row matched
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = match UserId::parse(&id) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(raw = %id, reason = %e, "delete with unparsable id, nothing to remove");
            return Ok(StatusCode::NO_CONTENT);
        }
    };

    let affected = state.deadline(state.store.delete(id)).await?;
    tracing::debug!(%id, affected, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
