//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use veloria_core::CompletionError;
use veloria_core::completion::APOLOGY;

use crate::models::{ChatResponse, ErrorResponse};

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion provider failed; carries the diagnostic detail.
    #[error("Completion unavailable: {0}")]
    CompletionUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::CompletionUnavailable(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ChatResponse {
                    reply: APOLOGY.to_string(),
                    error: Some(detail),
                }),
            )
                .into_response(),
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(e: CompletionError) -> Self {
        AppError::CompletionUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let resp = AppError::Validation("x".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::from(CompletionError::MissingApiKey).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn completion_errors_keep_their_diagnostic() {
        let err = AppError::from(CompletionError::Status {
            status: 502,
            body: "bad gateway".into(),
        });
        match err {
            AppError::CompletionUnavailable(detail) => {
                assert_eq!(detail, "Provider returned 502: bad gateway");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
