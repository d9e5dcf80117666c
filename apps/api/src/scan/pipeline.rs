//! Scan pipeline — orchestrates extraction, analysis, and the conditional
//! rewrite for one uploaded résumé.
//!
//! Client-input problems (unsupported suffix, unreadable document) reject the
//! request before any model call. Downstream completion faults instead ride
//! along inside the response as `{error}` data: extraction success is not
//! discarded just because a model call failed.

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{analyze_match, AnalysisOutcome};
use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::llm_client::CompletionService;
use crate::rewrite::{
    optimize_resume, RewriteOutcome, RewriteRequest, DEFAULT_HIRING_COMPANY,
    DEFAULT_TARGET_COUNTRY,
};

/// The `optimization` slot of a [`ScanResponse`]: a rewrite outcome when a
/// rewrite ran, or the empty string when nothing was missing (or the
/// analysis itself failed and there was no keyword list to close).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OptimizationSlot {
    Skipped(String),
    Outcome(RewriteOutcome),
}

impl OptimizationSlot {
    fn skipped() -> Self {
        OptimizationSlot::Skipped(String::new())
    }
}

/// Combined response for POST /analyze.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub text: String,
    pub analysis: AnalysisOutcome,
    pub optimization: OptimizationSlot,
}

/// Response for POST /refine.
#[derive(Debug, Clone, Serialize)]
pub struct RefineResponse {
    pub optimization: RewriteOutcome,
}

/// Runs the combined scan pipeline.
///
/// Steps:
/// 1. Suffix dispatch — unsupported formats are rejected with no model call.
/// 2. Text extraction — empty or whitespace-only text is rejected likewise.
/// 3. Match analysis — a failure becomes inline `{error}` data.
/// 4. Rewrite, only when the analysis surfaced missing keywords; the
///    analyzer's company/country pass through (with fallbacks).
pub async fn run_scan(
    completion: &dyn CompletionService,
    filename: &str,
    payload: &[u8],
    job_description: &str,
) -> Result<ScanResponse, AppError> {
    let kind = DocumentKind::from_filename(filename).ok_or_else(|| {
        AppError::Validation("Unsupported file format. Please upload PDF or DOCX.".to_string())
    })?;

    let resume_text = extract_text(kind, payload);
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from the file.".to_string(),
        ));
    }
    info!("Extracted {} chars from {filename}", resume_text.len());

    let analysis = analyze_match(completion, &resume_text, job_description).await;

    let optimization = match analysis.report() {
        Some(report) if !report.missing_keywords.is_empty() => {
            info!(
                "{} keywords missing, requesting rewrite targeting {}",
                report.missing_keywords.len(),
                report.hiring_company_name
            );
            let outcome = optimize_resume(
                completion,
                RewriteRequest {
                    resume_text: &resume_text,
                    missing_keywords: &report.missing_keywords,
                    hiring_company: non_empty_or(
                        &report.hiring_company_name,
                        DEFAULT_HIRING_COMPANY,
                    ),
                    target_country: non_empty_or(&report.target_country, DEFAULT_TARGET_COUNTRY),
                    user_feedback: None,
                },
            )
            .await;
            OptimizationSlot::Outcome(outcome)
        }
        _ => OptimizationSlot::skipped(),
    };

    Ok(ScanResponse {
        text: resume_text,
        analysis,
        optimization,
    })
}

/// Runs a refine pass: one rewrite with the user's feedback, no
/// re-extraction and no re-analysis.
pub async fn run_refine(
    completion: &dyn CompletionService,
    resume_text: &str,
    raw_keywords: &str,
    hiring_company: &str,
    target_country: &str,
    user_feedback: &str,
) -> RefineResponse {
    let missing_keywords = parse_keyword_list(raw_keywords);

    let optimization = optimize_resume(
        completion,
        RewriteRequest {
            resume_text,
            missing_keywords: &missing_keywords,
            hiring_company,
            target_country,
            user_feedback: Some(user_feedback),
        },
    )
    .await;

    RefineResponse { optimization }
}

/// Keyword lists cross the refine boundary as a JSON-encoded string.
/// Malformed input degrades to an empty list rather than failing the request.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Malformed missing_keywords payload, treating as empty: {e}");
        Vec::new()
    })
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
