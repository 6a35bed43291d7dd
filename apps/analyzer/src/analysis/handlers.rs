//! Axum route handlers for the Analysis API.

use std::io::Write;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::pipeline::analyze_cv_file;
use crate::analysis::report::render_report;
use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::errors::{AnalysisError, AppError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub cv_text: String,
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub job_title: String,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
    pub report: String,
}

impl AnalysisResponse {
    fn new(request: &AnalysisRequest, result: AnalysisResult) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            job_title: request.job_title().to_string(),
            analyzed_at: Utc::now(),
            report: render_report(request.job_title(), &result),
            result,
        }
    }
}

/// Fields collected from the multipart upload form.
#[derive(Default)]
struct UploadForm {
    job_title: Option<String>,
    file: Option<Bytes>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_title") => {
                form.job_title = Some(field.text().await?);
            }
            Some("file") => {
                form.file = Some(field.bytes().await?);
            }
            _ => {}
        }
    }
    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Multipart form with a `job_title` text field and a `file` PDF field.
/// The upload is spooled to a temp file for extraction and removed afterwards.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let job_title = form.job_title.unwrap_or_default();
    if job_title.trim().is_empty() {
        return Err(AnalysisError::InvalidJobTitle.into());
    }
    let file = form
        .file
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("Please select a CV file".to_string()))?;

    let mut spool = tempfile::Builder::new()
        .prefix("cv-upload-")
        .suffix(".pdf")
        .tempfile()
        .context("failed to create upload temp file")?;
    spool
        .write_all(&file)
        .and_then(|_| spool.flush())
        .context("failed to write upload temp file")?;

    let (request, result) =
        analyze_cv_file(&state.analyzer, spool.path().to_path_buf(), &job_title).await?;

    Ok(Json(AnalysisResponse::new(&request, result)))
}

/// POST /api/v1/analyses/text
///
/// Analyzes CV text that has already been extracted by the caller.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let request = AnalysisRequest::new(body.cv_text, &body.job_title)?;
    let result = state.analyzer.analyze(&request).await?;
    Ok(Json(AnalysisResponse::new(&request, result)))
}
