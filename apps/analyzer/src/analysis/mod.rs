// CV analysis: prompt construction, the completion round-trip, result parsing,
// and the extract-then-analyze pipeline the shell drives.

pub mod client;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod report;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Inputs for one analysis. The job title is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    cv_text: String,
    job_title: String,
}

impl AnalysisRequest {
    /// Rejects a job title that is empty after trimming.
    pub fn new(cv_text: impl Into<String>, job_title: &str) -> Result<Self, AnalysisError> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(AnalysisError::InvalidJobTitle);
        }
        Ok(Self {
            cv_text: cv_text.into(),
            job_title: job_title.to_string(),
        })
    }

    pub fn cv_text(&self) -> &str {
        &self.cv_text
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }
}

/// Structured critique returned by the model.
///
/// Every field is required; a missing or mistyped key fails deserialization.
/// Values are not range-checked: the score and list lengths are whatever the
/// model sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Nominally 0 – 100.
    pub overall_score: i64,
    /// Nominally 3 – 4 items.
    pub strengths: Vec<String>,
    /// Nominally 3 – 4 items.
    pub weaknesses: Vec<String>,
    /// Nominally 4 – 5 items.
    pub potential_questions: Vec<String>,
}
