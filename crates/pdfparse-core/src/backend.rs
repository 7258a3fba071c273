use thiserror::Error;

use crate::ExtractedText;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The buffer could not be loaded as a PDF document at all.
    #[error("{0}")]
    Open(String),
    /// The document loaded but a page's content could not be decoded.
    #[error("page {page}: {message}")]
    Extraction { page: u32, message: String },
    /// The PDF library panicked while working on the buffer.
    #[error("extraction aborted: {0}")]
    Panicked(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors own the PDF library dependency and return one string per page
/// in document order. Joining and trimming are done by [`ExtractedText`], so
/// every backend produces the same response shape.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page of an in-memory PDF.
    fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, BackendError>;
}
