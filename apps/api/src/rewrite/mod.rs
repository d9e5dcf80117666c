//! Résumé Optimizer — requests a full rewrite that closes the keyword gap
//! and retargets the résumé at the hiring company and country.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::llm_client::{strip_json_fences, CompletionService};
use crate::rewrite::prompts::{FEEDBACK_BLOCK_TEMPLATE, REWRITE_PROMPT_TEMPLATE};

pub mod prompts;

/// Model used for résumé rewriting.
pub const REWRITER_MODEL: &str = "gpt-4o-mini";

/// Fallback targeting context when the analyzer could not infer it.
pub const DEFAULT_HIRING_COMPANY: &str = "the target company";
pub const DEFAULT_TARGET_COUNTRY: &str = "International";

/// Inputs for one rewrite pass.
#[derive(Debug, Clone)]
pub struct RewriteRequest<'a> {
    pub resume_text: &'a str,
    pub missing_keywords: &'a [String],
    pub hiring_company: &'a str,
    pub target_country: &'a str,
    /// Free-text feedback from a refine round. When present it outranks
    /// every other prompt directive.
    pub user_feedback: Option<&'a str>,
}

/// Successful rewrite. `rewritten_text` and `full_modified_text` carry the
/// identical value: consumers evolved to expect either key name, so both
/// point at the one internally produced text.
#[derive(Debug, Clone, Serialize)]
pub struct RewrittenResume {
    pub original_text: String,
    pub rewritten_text: String,
    pub full_modified_text: String,
}

/// The shape the model is instructed to return.
#[derive(Debug, Deserialize)]
struct RewriteReply {
    rewritten_text: String,
}

/// Outcome of a rewrite call; the `Failed` variant travels as response data.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RewriteOutcome {
    Rewrite(RewrittenResume),
    Failed { error: String },
}

fn build_rewrite_prompt(request: &RewriteRequest<'_>) -> String {
    let feedback_block = match request.user_feedback {
        Some(feedback) => FEEDBACK_BLOCK_TEMPLATE.replace("{user_feedback}", feedback),
        None => String::new(),
    };

    REWRITE_PROMPT_TEMPLATE
        .replace("{missing_keywords}", &request.missing_keywords.join(", "))
        .replace("{hiring_company}", request.hiring_company)
        .replace("{target_country}", request.target_country)
        .replace("{feedback_block}", &feedback_block)
        .replace("{resume_text}", request.resume_text)
}

/// Rewrites the résumé for the hiring company and target country.
///
/// Same fail-closed discipline as the analyzer: one JSON-mode call, strict
/// parse, and any fault is returned as the `Failed` variant, never raised.
pub async fn optimize_resume(
    completion: &dyn CompletionService,
    request: RewriteRequest<'_>,
) -> RewriteOutcome {
    let prompt = build_rewrite_prompt(&request);

    let raw = match completion.complete(REWRITER_MODEL, &prompt, true).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Error during optimization: {e}");
            return RewriteOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    match serde_json::from_str::<RewriteReply>(strip_json_fences(&raw)) {
        Ok(reply) => RewriteOutcome::Rewrite(RewrittenResume {
            original_text: request.resume_text.to_string(),
            rewritten_text: reply.rewritten_text.clone(),
            full_modified_text: reply.rewritten_text,
        }),
        Err(e) => {
            error!("Rewrite response was not valid JSON: {e}");
            RewriteOutcome::Failed {
                error: format!("Invalid rewrite response: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::{MockCompletion, MockReply};

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn request<'a>(
        resume: &'a str,
        missing: &'a [String],
        feedback: Option<&'a str>,
    ) -> RewriteRequest<'a> {
        RewriteRequest {
            resume_text: resume,
            missing_keywords: missing,
            hiring_company: "Acme Corp",
            target_country: "Finland",
            user_feedback: feedback,
        }
    }

    #[test]
    fn test_prompt_carries_targeting_context_and_keywords() {
        let missing = keywords(&["aws", "docker"]);
        let prompt = build_rewrite_prompt(&request("My resume", &missing, None));

        assert!(prompt.contains("Acme Corp"));
        assert!(prompt.contains("Finland"));
        assert!(prompt.contains("aws, docker"));
        assert!(prompt.contains("My resume"));
    }

    #[test]
    fn test_prompt_without_feedback_omits_priority_block() {
        let missing = keywords(&["aws"]);
        let prompt = build_rewrite_prompt(&request("resume", &missing, None));
        assert!(!prompt.contains("HIGHEST PRIORITY"));
        assert!(!prompt.contains("{feedback_block}"));
    }

    #[test]
    fn test_prompt_with_feedback_injects_priority_block() {
        let missing = keywords(&[]);
        let prompt = build_rewrite_prompt(&request(
            "resume",
            &missing,
            Some("I never actually used Kubernetes, remove it"),
        ));
        assert!(prompt.contains("HIGHEST PRIORITY"));
        assert!(prompt.contains("I never actually used Kubernetes, remove it"));
    }

    #[tokio::test]
    async fn test_optimize_surfaces_one_value_under_both_keys() {
        let mock = MockCompletion::with_replies(vec![MockReply::Text(
            r#"{"rewritten_text": "REWRITTEN RESUME BODY"}"#.to_string(),
        )]);
        let missing = keywords(&["aws"]);
        let outcome = optimize_resume(&mock, request("ORIGINAL BODY", &missing, None)).await;

        match outcome {
            RewriteOutcome::Rewrite(result) => {
                assert_eq!(result.original_text, "ORIGINAL BODY");
                assert_eq!(result.rewritten_text, "REWRITTEN RESUME BODY");
                assert_eq!(result.rewritten_text, result.full_modified_text);
            }
            RewriteOutcome::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    #[tokio::test]
    async fn test_optimize_fault_becomes_failed_variant() {
        let mock = MockCompletion::with_replies(vec![MockReply::Failure("quota".to_string())]);
        let missing = keywords(&["aws"]);
        let outcome = optimize_resume(&mock, request("resume", &missing, None)).await;

        match outcome {
            RewriteOutcome::Failed { error } => assert!(error.contains("quota")),
            RewriteOutcome::Rewrite(_) => panic!("expected the error variant"),
        }
    }

    #[tokio::test]
    async fn test_optimize_shape_mismatch_fails_closed() {
        let mock = MockCompletion::with_replies(vec![MockReply::Text(
            "Here is your shiny new resume!".to_string(),
        )]);
        let missing = keywords(&[]);
        let outcome = optimize_resume(&mock, request("resume", &missing, None)).await;
        assert!(matches!(outcome, RewriteOutcome::Failed { .. }));
    }

    #[test]
    fn test_failed_outcome_serializes_as_error_object() {
        let outcome = RewriteOutcome::Failed {
            error: "boom".to_string(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, serde_json::json!({"error": "boom"}));
    }
}
