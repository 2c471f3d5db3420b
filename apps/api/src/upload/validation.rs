use thiserror::Error;

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("No resume file provided")]
    MissingFile,

    #[error("No file selected")]
    NoFileSelected,

    #[error("Only PDF files are allowed")]
    UnsupportedExtension,

    #[error("File is empty")]
    Empty,

    #[error("File size too large. Maximum allowed: {max_mb}MB")]
    TooLarge { max_mb: usize },

    #[error("Could not extract text from PDF file: {0}")]
    Extraction(String),
}

/// Validates an uploaded file's name and size.
///
/// PASS conditions:
/// - non-empty filename
/// - extension in `ALLOWED_EXTENSIONS` (case-insensitive)
/// - 1 ..= `max_bytes` bytes
pub fn validate_upload(filename: &str, size_bytes: usize, max_bytes: usize) -> Result<(), UploadError> {
    if filename.trim().is_empty() {
        return Err(UploadError::NoFileSelected);
    }
    if !allowed_file(filename) {
        return Err(UploadError::UnsupportedExtension);
    }
    if size_bytes > max_bytes {
        return Err(UploadError::TooLarge {
            max_mb: max_bytes / (1024 * 1024),
        });
    }
    if size_bytes == 0 {
        return Err(UploadError::Empty);
    }
    Ok(())
}

pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Strips any directory components and replaces characters outside `[A-Za-z0-9._-]`.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = DEFAULT_MAX_UPLOAD_BYTES;

    #[test]
    fn test_valid_pdf() {
        assert!(validate_upload("resume.pdf", 1024, MAX).is_ok());
        assert!(validate_upload("Resume.PDF", 1024, MAX).is_ok());
    }

    #[test]
    fn test_empty_filename() {
        assert_eq!(validate_upload("", 10, MAX), Err(UploadError::NoFileSelected));
    }

    #[test]
    fn test_wrong_extension() {
        assert_eq!(validate_upload("resume.docx", 10, MAX), Err(UploadError::UnsupportedExtension));
        assert_eq!(validate_upload("pdf", 10, MAX), Err(UploadError::UnsupportedExtension));
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(validate_upload("a.pdf", 0, MAX), Err(UploadError::Empty));
        let err = validate_upload("a.pdf", MAX + 1, MAX).unwrap_err();
        assert_eq!(err.to_string(), "File size too large. Maximum allowed: 16MB");
        assert!(validate_upload("a.pdf", MAX, MAX).is_ok());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\my cv.pdf"), "my_cv.pdf");
        assert_eq!(sanitize_filename(".hidden.pdf"), "hidden.pdf");
    }
}
