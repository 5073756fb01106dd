use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;
use utoipa::ToSchema;

/// ApiError
///
/// The single error type returned by handlers and middleware. Variants map onto
/// the status families the API documents; database and other internal failures
/// are logged with full detail server-side and collapsed into a generic body so
/// implementation details never reach clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carries no usable identity. Clients get one generic message
    /// regardless of the underlying deny reason (missing header, bad signature,
    /// expired token, ...); the reason itself only goes to the logs.
    #[error("authentication required")]
    Unauthorized,
    /// Identity is valid but not allowed to perform this action.
    #[error("insufficient permissions")]
    Forbidden,
    /// The payload names the missing resource ("post", "comment", ...).
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database failure")]
    Database(#[from] sqlx::Error),
    #[error("internal failure")]
    Internal(String),
}

/// ErrorBody
///
/// The JSON envelope every error response uses: `{"error": "..."}`.
#[derive(Debug, Serialize, TS, ToSchema)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::Database(e) => {
                tracing::error!("Database failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!("Internal failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// is_unique_violation
///
/// True when a sqlx error is a Postgres unique-constraint violation (23505).
/// Insert paths use this to turn constraint races into the 400/409 responses
/// the API documents instead of a blanket 500.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_db_code(err, "23505")
}

/// is_foreign_key_violation
///
/// True when a sqlx error is a Postgres foreign-key violation (23503), i.e.
/// an attempt to delete a row other rows still reference.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_db_code(err, "23503")
}

fn has_db_code(err: &sqlx::Error, code: &str) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|c| c == code)
        .unwrap_or(false)
}
