//! Axum route handlers for the drafting API.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Deserialize;

use crate::drafting::export::{build_docx, DOCX_MIME, EXPORT_FILENAME};
use crate::drafting::generator::{draft_resume, DraftRequest, DraftResponse};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub resume_markdown: String,
}

/// POST /api/v1/resumes/draft
///
/// Drafts a markdown resume from the submitted form fields. Required fields
/// are checked before the LLM is called.
pub async fn handle_draft(
    State(state): State<AppState>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    let resume_markdown = draft_resume(&request, &state.llm).await?;
    Ok(Json(DraftResponse { resume_markdown }))
}

/// POST /api/v1/resumes/export
///
/// Packages previously drafted text as a .docx attachment. Pure local
/// transformation, no LLM involved.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let bytes = build_docx(&request.resume_markdown)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{EXPORT_FILENAME}\""))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid disposition header: {e}")))?,
    );

    Ok((headers, bytes))
}
