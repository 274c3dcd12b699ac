//! Axum route handlers for the ATS scanner API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::ats::extract::{extract_text, has_extractable_text};
use crate::ats::feedback::generate_feedback;
use crate::ats::scoring::{score, ScoreRequest, ScoreResult};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub score: u8,
    pub missing_keywords: Vec<String>,
    pub feedback: String,
    /// True when the PDF parsed but carried no text layer (e.g. scanned
    /// images). The score is still computed, against an empty resume.
    pub no_text_extracted: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores raw resume text against a job description. Exposes the scorer
/// contract directly: an empty job description is not an error and yields
/// the zero sentinel `(0, [])`.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let result = score(
        state.embedder.as_ref(),
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/ats/scan
///
/// Full scan pipeline: PDF upload → text extraction → score → LLM feedback.
/// Multipart fields: `resume` (the PDF file) and `job_description` (text).
/// Both are validated before extraction or any remote call.
pub async fn handle_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let mut pdf_bytes: Option<Bytes> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart form: {e}")))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("resume") => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read the resume upload: {e}"))
                })?;
                pdf_bytes = Some(data);
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read the job description: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let pdf_bytes = pdf_bytes
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("Please upload your resume".to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste the job description".to_string(),
        ));
    }

    // Extraction parses the whole PDF; keep it off the async runtime.
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&pdf_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    let no_text_extracted = !has_extractable_text(&resume_text);
    if no_text_extracted {
        info!("Uploaded PDF has no extractable text; scoring against an empty resume");
    }

    let result = score(state.embedder.as_ref(), &resume_text, &job_description).await?;
    info!(
        "Scan scored {}/100 with {} missing keyword(s)",
        result.score,
        result.missing_keywords.len()
    );

    let feedback = generate_feedback(&result, &job_description, &state.llm).await?;

    Ok(Json(ScanResponse {
        score: result.score,
        missing_keywords: result.missing_keywords,
        feedback,
        no_text_extracted,
    }))
}
