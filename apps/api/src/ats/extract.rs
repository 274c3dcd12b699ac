//! PDF text extraction for the ATS scanner.
//!
//! Uploads arrive as in-memory bytes but the PDF parser wants a path, so the
//! bytes are spooled to a named temporary file for the duration of the call.
//! The `NamedTempFile` guard deletes it on drop, which covers every exit path
//! including parse failures.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Prefix for transient PDF copies, so stray files are attributable.
const TEMP_PREFIX: &str = "ats-resume-";

/// Extracts plain text from PDF bytes.
///
/// Per-page text is concatenated in page order; a page without an extractable
/// text layer (scanned images, vector-only content) contributes an empty
/// string. A structurally unreadable PDF is an unprocessable-entity error.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, AppError> {
    extract_text_in(&std::env::temp_dir(), pdf_bytes)
}

fn extract_text_in(dir: &Path, pdf_bytes: &[u8]) -> Result<String, AppError> {
    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".pdf")
        .tempfile_in(dir)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to create temp file: {e}")))?;
    temp.write_all(pdf_bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to spool upload: {e}")))?;

    let pages = pdf_extract::extract_text_by_pages(temp.path())
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read the PDF: {e}")))?;
    debug!("Extracted text from {} PDF page(s)", pages.len());

    Ok(pages.concat())
}

/// True when extraction produced usable text. The caller distinguishes "the
/// file was unreadable" (an error from [`extract_text`]) from "the file was
/// readable but carries no text layer" (this returning false).
pub fn has_extractable_text(text: &str) -> bool {
    !text.trim().is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
