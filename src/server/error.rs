use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Boundary error mapping: malformed input is the caller's fault, everything
/// propagated from upstream surfaces as a generic 500.
pub enum AppError {
    BadRequest(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, "INVALID_REQUEST"),
            AppError::Internal(err) => {
                tracing::error!("verification failed: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };
        (
            status,
            Json(serde_json::json!({ "error": { "code": code, "message": message } })),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
