//! CV analysis client — one prompt, one completion call, one typed parse.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_MAX_TOKENS, ANALYSIS_SYSTEM};
use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::errors::AnalysisError;
use crate::llm_client::{strip_json_fences, CompletionRequest, CompletionService};

/// Analyzes CV text against a job title using a completion service.
///
/// Holds no per-request state; clones share the same underlying service.
#[derive(Clone)]
pub struct CvAnalysisClient {
    completion: Arc<dyn CompletionService>,
}

impl CvAnalysisClient {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Sends the analysis prompt and parses the reply into an `AnalysisResult`.
    ///
    /// Exactly one completion call is made. Transport failures and unusable
    /// replies are returned as-is; nothing is retried.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        if request.cv_text().trim().is_empty() {
            warn!(
                "Analyzing empty CV text for '{}'; the PDF may be image-only",
                request.job_title()
            );
        }

        info!(
            "Requesting CV analysis for '{}' ({} chars of CV text)",
            request.job_title(),
            request.cv_text().len()
        );

        let completion_request = CompletionRequest {
            system: ANALYSIS_SYSTEM.to_string(),
            prompt: build_analysis_prompt(request.cv_text(), request.job_title()),
            json_output: true,
            max_tokens: ANALYSIS_MAX_TOKENS,
        };

        let text = self.completion.complete(&completion_request).await?;
        let result = parse_analysis(&text)?;

        info!(
            "CV analysis for '{}' complete: score={}",
            request.job_title(),
            result.overall_score
        );
        Ok(result)
    }
}

/// Parses completion text into an `AnalysisResult`.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisError> {
    Ok(serde_json::from_str(strip_json_fences(text))?)
}
