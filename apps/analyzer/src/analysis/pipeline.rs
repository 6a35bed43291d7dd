//! Extract-then-analyze pipeline.
//!
//! Flow: extract_text (blocking thread) → CvAnalysisClient::analyze.
//! The first failure aborts the remaining steps.

use std::path::PathBuf;

use tracing::info;

use crate::analysis::client::CvAnalysisClient;
use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::errors::AnalysisError;
use crate::extract::extract_text;

/// Reads the PDF at `path` and analyzes it for `job_title`.
pub async fn analyze_cv_file(
    client: &CvAnalysisClient,
    path: PathBuf,
    job_title: &str,
) -> Result<(AnalysisRequest, AnalysisResult), AnalysisError> {
    // Validate before touching the file.
    AnalysisRequest::new("", job_title)?;

    info!("Extracting CV text from {}", path.display());
    let cv_text = tokio::task::spawn_blocking(move || extract_text(&path))
        .await
        .map_err(|e| AnalysisError::Io(format!("extraction task failed: {e}")))??;

    let request = AnalysisRequest::new(cv_text, job_title)?;
    let result = client.analyze(&request).await?;
    Ok((request, result))
}
