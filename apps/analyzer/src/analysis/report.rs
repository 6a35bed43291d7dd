use std::fmt::Write;

use crate::analysis::AnalysisResult;

const BULLET: &str = "• ";

/// Renders an analysis as the plain-text report shown to the user.
pub fn render_report(job_title: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "CV Analysis for {job_title}:");
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall Score: {}/100", result.overall_score);
    push_section(&mut out, "Strengths", &result.strengths);
    push_section(&mut out, "Weaknesses", &result.weaknesses);
    push_section(&mut out, "Potential Interview Questions", &result.potential_questions);
    out
}

fn push_section(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{heading}:");
    for item in items {
        let _ = writeln!(out, "{BULLET}{item}");
    }
}
