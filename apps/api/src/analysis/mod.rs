//! Match Analyzer — scores a résumé against a job description through one
//! structured completion call.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::analysis::prompts::MATCH_PROMPT_TEMPLATE;
use crate::llm_client::{strip_json_fences, CompletionService};

pub mod prompts;

/// Model used for match analysis.
pub const ANALYZER_MODEL: &str = "gpt-5.2";

/// Structured result of a successful match analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Inferred from the job description, or literally `"Unknown"`.
    pub hiring_company_name: String,
    /// Inferred from location or language, `"International"` when unstated.
    pub target_country: String,
    /// Advisory 0–100 score. Parsed strictly as an unsigned integer but not
    /// clamped; the range is a prompt instruction, not an enforced invariant.
    pub match_score: u32,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub summary: String,
}

/// Outcome of an analysis call. Failures are data, not errors: the scan
/// pipeline embeds the `Failed` variant in its response instead of aborting
/// the request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(MatchReport),
    Failed { error: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&MatchReport> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Failed { .. } => None,
        }
    }
}

/// Analyzes how well a résumé matches a job description.
///
/// One synchronous completion call requesting JSON output — no streaming, no
/// multi-turn exchange, no retry. The raw payload is fence-stripped and
/// parsed strictly into [`MatchReport`]; any call fault, empty payload, or
/// shape mismatch yields the `Failed` variant after logging.
pub async fn analyze_match(
    completion: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
) -> AnalysisOutcome {
    let prompt = MATCH_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text);

    let raw = match completion.complete(ANALYZER_MODEL, &prompt, true).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Error during analysis: {e}");
            return AnalysisOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    match serde_json::from_str::<MatchReport>(strip_json_fences(&raw)) {
        Ok(report) => AnalysisOutcome::Report(report),
        Err(e) => {
            error!("Analysis response was not valid JSON: {e}");
            AnalysisOutcome::Failed {
                error: format!("Invalid analysis response: {e}"),
            }
        }
    }
}
