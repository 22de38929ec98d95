use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use sitter_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sitter_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body is not declared as JSON.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::ValidationRejected(reason) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "non_field_errors": [reason] }),
                ),
                CoreError::FieldErrors(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
                CoreError::InvalidPage => {
                    (StatusCode::NOT_FOUND, json!({ "detail": "Invalid page." }))
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, error_body("BAD_REQUEST", msg)),
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                error_body("UNSUPPORTED_MEDIA_TYPE", msg),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn error_body(code: &str, message: impl Into<String>) -> Value {
    json!({
        "error": message.into(),
        "code": code,
    })
}

fn internal_error() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body("INTERNAL_ERROR", "An internal error occurred"),
    )
}

/// Classify a sqlx error into an HTTP status and JSON body.
///
/// - `RowNotFound` maps to 404.
/// - Check constraint violations (constraint name starting with `ck_`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            error_body("NOT_FOUND", "Resource not found"),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL check constraint violation: error code 23514
            if db_err.code().as_deref() == Some("23514") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("ck_") {
                    return (
                        StatusCode::BAD_REQUEST,
                        error_body(
                            "BAD_REQUEST",
                            format!("Value violates check constraint: {constraint}"),
                        ),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
