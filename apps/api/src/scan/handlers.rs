//! Axum route handlers for the scan API.

use axum::extract::{Multipart, State};
use axum::{Form, Json};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::rewrite::{DEFAULT_HIRING_COMPANY, DEFAULT_TARGET_COUNTRY};
use crate::scan::pipeline::{run_refine, run_scan, RefineResponse, ScanResponse};
use crate::state::AppState;

/// POST /analyze
///
/// Multipart body: a `file` part (the résumé document) and a
/// `job_description` text part. Returns the extracted text, the match
/// analysis, and — when keywords are missing — a full rewrite.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Validation("Invalid file".to_string()))?;
                upload = Some((filename, data));
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| AppError::Validation("Invalid job description".to_string()))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, payload) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' part".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("Missing 'job_description' part".to_string()))?;

    let response = run_scan(
        state.completion.as_ref(),
        &filename,
        &payload,
        &job_description,
    )
    .await?;

    Ok(Json(response))
}

fn default_missing_keywords() -> String {
    "[]".to_string()
}

fn default_hiring_company() -> String {
    DEFAULT_HIRING_COMPANY.to_string()
}

fn default_target_country() -> String {
    DEFAULT_TARGET_COUNTRY.to_string()
}

/// Form body for POST /refine.
#[derive(Debug, Deserialize)]
pub struct RefineForm {
    pub resume_text: String,
    /// JSON-encoded keyword list; malformed input degrades to an empty list.
    #[serde(default = "default_missing_keywords")]
    pub missing_keywords: String,
    #[serde(default = "default_hiring_company")]
    pub hiring_company: String,
    #[serde(default = "default_target_country")]
    pub target_country: String,
    pub user_feedback: String,
}

/// POST /refine
///
/// Re-runs the optimizer over already-extracted résumé text with the user's
/// feedback as the highest-priority instruction. No re-extraction, no
/// re-analysis.
pub async fn handle_refine(
    State(state): State<AppState>,
    Form(form): Form<RefineForm>,
) -> Result<Json<RefineResponse>, AppError> {
    let response = run_refine(
        state.completion.as_ref(),
        &form.resume_text,
        &form.missing_keywords,
        &form.hiring_company,
        &form.target_country,
        &form.user_feedback,
    )
    .await;

    Ok(Json(response))
}
