//! Text-extraction boundary - turns uploaded resume bytes into plain text.
//!
//! Kept deliberately thin: the evaluation core treats extraction as an
//! external collaborator and only needs its failures to be structured.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("failed to read PDF: {0}")]
    Pdf(String),

    #[error("extracted text was empty")]
    Empty,
}

/// Extracts text from an uploaded file, keyed by its extension.
/// Blank output is a failure: downstream preconditions require non-blank text.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match ext.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
        "txt" | "text" | "md" => String::from_utf8_lossy(bytes).into_owned(),
        _ => return Err(ExtractionError::Unsupported(filename.to_string())),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}
