//! Error types for the pagemark library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while annotating extracted pages.
#[derive(Error, Debug)]
pub enum Error {
    /// The input batch is malformed or empty.
    #[error("Invalid page batch: {0}")]
    Validation(String),

    /// The title/list/link scan failed.
    #[error("Markdown scan error: {0}")]
    Scan(String),

    /// The table or image scan failed.
    #[error("Element extraction error: {0}")]
    Extraction(String),

    /// Joining the per-page sub-results failed (e.g., token counting).
    #[error("Page assembly error: {0}")]
    Assembly(String),

    /// Language identification failed.
    ///
    /// Never escapes the assembler; it exists so custom
    /// [`LanguageDetector`](crate::detect::LanguageDetector)
    /// implementations have a variant to return.
    #[error("Language detection failed: {0}")]
    LanguageDetect(String),

    /// A lower-level error, wrapped with the page it occurred on.
    #[error("Page {} of '{}': {}", .page, .source_path.display(), .source)]
    Page {
        /// Path of the source document the page came from.
        source_path: PathBuf,
        /// 1-indexed page number.
        page: u32,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing results to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an error with the source path and page number it occurred on.
    pub fn on_page(self, source_path: impl Into<PathBuf>, page: u32) -> Self {
        Error::Page {
            source_path: source_path.into(),
            page,
            source: Box::new(self),
        }
    }

    /// Check whether this error (or the one it wraps) is a validation error.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::Page { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation("batch is empty".to_string());
        assert_eq!(err.to_string(), "Invalid page batch: batch is empty");

        let err = Error::Assembly("token counting failed".to_string());
        assert_eq!(err.to_string(), "Page assembly error: token counting failed");
    }

    #[test]
    fn test_page_wrapping() {
        let err = Error::Scan("bad pattern".to_string()).on_page("doc.pdf", 3);
        let msg = err.to_string();
        assert!(msg.contains("Page 3"));
        assert!(msg.contains("doc.pdf"));
        assert!(msg.contains("bad pattern"));
    }

    #[test]
    fn test_is_validation_through_page_wrapper() {
        let err = Error::Validation("oops".to_string()).on_page("doc.pdf", 1);
        assert!(err.is_validation());

        let err = Error::Scan("oops".to_string()).on_page("doc.pdf", 1);
        assert!(!err.is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
