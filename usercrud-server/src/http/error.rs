//! API error types with IntoResponse
//!
//! Error bodies are plain text. Clients get the HTTP status and a free-text
//! message; backend failures expose the driver's message as-is.

use std::time::Duration;

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::{UserId, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded as JSON (400)
    Validation(ValidationError),

    /// Request body could not be buffered (status from axum, 413 over the limit)
    Body(BytesRejection),

    /// Non-numeric id where the handler requires one (400)
    InvalidUserId,

    /// No row for the requested key (404, empty body)
    NotFound,

    /// Database error (500, logged)
    Database(DbError),

    /// Update re-read found no row (500, logged)
    MissingAfterWrite { id: UserId },

    /// Database call exceeded the per-request deadline (504)
    Timeout { after: Duration },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            Self::Body(rejection) => {
                tracing::debug!(status = %rejection.status(), "request body rejected");
                rejection.into_response()
            }
            Self::InvalidUserId => {
                (StatusCode::BAD_REQUEST, "Invalid user ID").into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            Self::MissingAfterWrite { id } => {
                tracing::error!(%id, "user row missing on re-read after update");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("no user with id {} after update", id),
                )
                    .into_response()
            }
            Self::Timeout { after } => {
                tracing::warn!(?after, "database call exceeded deadline");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    format!("database call timed out after {} seconds", after.as_secs()),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
