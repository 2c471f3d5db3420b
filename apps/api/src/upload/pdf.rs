use tracing::{debug, warn};

use crate::upload::validation::UploadError;

/// Extracts plain text from PDF bytes. Text that is empty after trimming counts as a
/// failed extraction (scanned PDFs without a text layer land here).
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, UploadError> {
    let text = pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| {
        warn!("PDF extraction error: {e}");
        UploadError::Extraction(e.to_string())
    })?;

    if text.trim().is_empty() {
        return Err(UploadError::Extraction(
            "no text layer found in document".to_string(),
        ));
    }

    debug!(chars = text.len(), "PDF text extracted");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, UploadError::Extraction(_)));
    }
}
