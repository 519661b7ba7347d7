use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use flatprice_inference::InferenceError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`InferenceError`] for failures inside the opaque artifacts and
/// adds HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A transform/predict failure inside the model artifacts.
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Artifact failures are not translated into anything finer:
            // there is no retry or fallback, only a generic failure with
            // the detail kept in the logs.
            AppError::Inference(err) => {
                tracing::error!(error = %err, "Inference failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INFERENCE_ERROR",
                    "Price estimation failed".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
