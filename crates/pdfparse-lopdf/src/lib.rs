use lopdf::Document;

use pdfparse_core::{BackendError, ExtractedText, PdfBackend};

/// lopdf-based implementation of [`PdfBackend`].
///
/// This crate is the only one that depends on `lopdf`, so swapping the PDF
/// library touches nothing outside it. Text is taken page by page with
/// lopdf's own content-stream walker; no layout analysis is attempted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, BackendError> {
        let document = Document::load_mem(data).map_err(|e| BackendError::Open(e.to_string()))?;

        // BTreeMap keyed by 1-based page number, so iteration is document order.
        let pages = document.get_pages();
        tracing::debug!(pages = pages.len(), bytes = data.len(), "loaded PDF document");

        let mut extracted = ExtractedText::new();
        for &page_number in pages.keys() {
            let page_text =
                document
                    .extract_text(&[page_number])
                    .map_err(|e| BackendError::Extraction {
                        page: page_number,
                        message: e.to_string(),
                    })?;
            extracted.push_page(page_text);
        }

        Ok(extracted)
    }
}
