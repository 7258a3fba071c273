use pdfparse_core::PdfBackend;

/// Shared application state accessible from all handlers.
///
/// Read-only after startup; each request gets its own buffer and document.
pub struct AppState {
    pub backend: Box<dyn PdfBackend>,
}

impl AppState {
    pub fn new(backend: Box<dyn PdfBackend>) -> Self {
        Self { backend }
    }
}
