use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Terminal failures of a single CV analysis. The first one raised aborts the
/// remaining pipeline steps and no result is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The job title is empty after trimming.
    #[error("Please enter a job title")]
    InvalidJobTitle,

    /// The PDF could not be opened or is not a readable PDF document.
    #[error("Failed to read PDF: {0}")]
    Io(String),

    /// The completion service could not be reached or refused the request.
    #[error("API Error: {0}")]
    Transport(String),

    /// The completion text is not JSON or lacks one of the required keys.
    #[error("Invalid analysis response: {0}")]
    Parse(String),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => AnalysisError::Parse(err.to_string()),
            LlmError::Http(_) | LlmError::Api { .. } => AnalysisError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Parse(err.to_string())
    }
}

/// Shell-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The multipart body could not be read, including bodies over the upload limit.
    #[error("{}", .0.body_text())]
    Upload(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Analysis failures are shown to the user as-is.
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(err @ AnalysisError::InvalidJobTitle) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            AppError::Upload(err) => {
                let status = err.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "UPLOAD_ERROR"
                };
                (status, code, err.body_text())
            }
            AppError::Analysis(err @ AnalysisError::Io(_)) => {
                tracing::warn!("Extraction failed: {err}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    err.to_string(),
                )
            }
            AppError::Analysis(err @ AnalysisError::Transport(_)) => {
                tracing::error!("Completion service error: {err}");
                (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR", err.to_string())
            }
            AppError::Analysis(err @ AnalysisError::Parse(_)) => {
                tracing::error!("Unusable completion: {err}");
                (StatusCode::BAD_GATEWAY, "PARSE_ERROR", err.to_string())
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
