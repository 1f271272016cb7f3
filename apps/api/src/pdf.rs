//! PDF text extraction with upload guards.

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Rejects uploads that are empty, oversized, or not actually PDFs before
/// handing the bytes to the extraction backend.
pub fn extract_text(bytes: &[u8], max_bytes: usize) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::InvalidUpload("Uploaded file is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::InvalidUpload(format!(
            "Uploaded file exceeds the {max_bytes} byte limit"
        )));
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::InvalidUpload(
            "Uploaded file is not a PDF".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::Pdf(
            "PDF contained no extractable text".to_string(),
        ));
    }

    Ok(text)
}
