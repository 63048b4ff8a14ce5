use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coursedesk_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform error body
/// `{"type": <kind>, "message": <text>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `coursedesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Missing or unparsable request parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Error kind tags carried in the `type` field of every error body.
pub mod kind {
    pub const NOT_FOUND: &str = "EntityNotFoundException";
    pub const BAD_REQUEST: &str = "BadRequestException";
    pub const FORBIDDEN: &str = "AccessDeniedException";
    pub const INTERNAL: &str = "InternalServerException";
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                kind::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Forbidden(msg)) => {
                (StatusCode::FORBIDDEN, kind::FORBIDDEN, msg.clone())
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, kind::BAD_REQUEST, msg.clone()),
        };

        let body = json!({
            "type": kind,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error kind, and message.
///
/// `RowNotFound` (an update of a vanished row) maps to 404. Everything else
/// is logged and reported as 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            kind::NOT_FOUND,
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                kind::INTERNAL,
                "An internal error occurred".to_string(),
            )
        }
    }
}
