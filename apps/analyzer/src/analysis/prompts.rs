// LLM prompt constants for CV analysis.

/// Persona instruction sent as the system message.
pub const ANALYSIS_SYSTEM: &str = "You are a professional recruiter and CV analyst.";

/// Upper bound on completion tokens for one analysis.
pub const ANALYSIS_MAX_TOKENS: u32 = 500;

/// Analysis prompt template. Replace `{job_title}` (twice) and `{cv_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following CV for a {job_title} position:

CV Text:
{cv_text}

Please provide a structured analysis with the following sections:
1. Overall Score (out of 100)
2. Strengths (3-4 points specific to the job)
3. Weaknesses (3-4 points for improvement)
4. Potential Interview Questions (4-5 questions to assess the candidate)

Format your response as a JSON object with these exact keys:
{
    "overall_score": <number>,
    "strengths": [<string>, <string>, ...],
    "weaknesses": [<string>, <string>, ...],
    "potential_questions": [<string>, <string>, ...]
}

Ensure the analysis is tailored to the specific requirements of a {job_title}."#;

/// Fills the analysis template.
///
/// The template is split at `{cv_text}` and the job title is substituted into
/// each half only, so neither input can land in the other's placeholder.
pub fn build_analysis_prompt(cv_text: &str, job_title: &str) -> String {
    let (head, tail) = ANALYSIS_PROMPT_TEMPLATE
        .split_once("{cv_text}")
        .unwrap_or((ANALYSIS_PROMPT_TEMPLATE, ""));

    let mut prompt = head.replace("{job_title}", job_title);
    prompt.push_str(cv_text);
    prompt.push_str(&tail.replace("{job_title}", job_title));
    prompt
}
