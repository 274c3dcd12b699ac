//! Docx export — packages the drafted text for download.
//!
//! Layout is deliberately simple: one docx paragraph per newline-delimited
//! line, markdown markers left in place. Word-processor styling is the
//! user's job once they have the file.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::errors::AppError;

/// Filename offered to the browser for the download.
pub const EXPORT_FILENAME: &str = "My_Resume.docx";

/// MIME type of the export artifact.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Builds a .docx from the drafted resume text.
pub fn build_docx(resume_text: &str) -> Result<Vec<u8>, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_markdown cannot be empty".to_string(),
        ));
    }

    let mut docx = Docx::new();
    for line in resume_text.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to pack docx: {e}")))?;

    Ok(buffer.into_inner())
}
