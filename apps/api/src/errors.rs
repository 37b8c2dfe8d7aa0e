use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::compiler::CompileError;
use crate::portable::ImportError;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Nothing to render yet")]
    NothingToRender,

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Import(e) => (StatusCode::BAD_REQUEST, "IMPORT_ERROR", e.to_string()),
            AppError::NothingToRender => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NOTHING_TO_RENDER",
                "Add a name, an email or a section before rendering".to_string(),
            ),
            AppError::Compile(CompileError::Service { status, message }) => {
                tracing::warn!("Compile service rejected document ({status}): {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPILE_FAILED",
                    format!(
                        "LaTeX compilation failed. Please check your resume data for special characters. {message}"
                    ),
                )
            }
            AppError::Compile(CompileError::EmptyPayload) => {
                tracing::warn!("Compile service returned an empty document");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPILE_EMPTY",
                    "The LaTeX compile service returned an empty document".to_string(),
                )
            }
            AppError::Compile(e) => {
                tracing::error!("Compile service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPILE_UNAVAILABLE",
                    "The LaTeX compile service is unavailable".to_string(),
                )
            }
            AppError::Storage(StorageError::LimitReached { max }) => (
                StatusCode::CONFLICT,
                "LIMIT_REACHED",
                format!("Maximum of {max} resumes allowed"),
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::NothingToRender, StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::Import(ImportError::MissingField("header")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Storage(StorageError::LimitReached { max: 5 }),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Compile(CompileError::EmptyPayload),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    async fn error_body(error: AppError) -> serde_json::Value {
        use http_body_util::BodyExt;
        let bytes = error.into_response().into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_compile_payload_is_not_reported_as_unavailable() {
        let body = error_body(AppError::Compile(CompileError::EmptyPayload)).await;
        assert_eq!(body["error"]["code"], "COMPILE_EMPTY");
        assert!(body["error"]["message"].as_str().unwrap().contains("empty document"));
    }
}
