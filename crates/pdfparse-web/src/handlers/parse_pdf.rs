use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use std::sync::Arc;

use pdfparse_core::{BackendError, ExtractedText};

use crate::error::ParseError;
use crate::models::ParseResponse;
use crate::state::AppState;
use crate::upload;

pub async fn parse_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseResponse>, ParseError> {
    let file = match upload::read_pdf_upload(multipart).await {
        Ok(file) => file,
        Err(e) => {
            if e.status().is_server_error() {
                tracing::error!(error = %e, "error reading upload");
            } else {
                tracing::debug!(error = %e, "rejected upload");
            }
            return Err(e);
        }
    };

    let filename = file.filename;
    match extract_blocking(state, file.data).await {
        Ok(extracted) => {
            let text = extracted.text();
            tracing::info!(
                filename = %filename,
                pages = extracted.page_count(),
                chars = text.chars().count(),
                "successfully extracted text from PDF"
            );
            Ok(Json(ParseResponse::new(text)))
        }
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "error parsing PDF");
            Err(e.into())
        }
    }
}

/// Run the backend on tokio's blocking pool. A panic inside the PDF library
/// comes back as a join error and is reported like any other failure.
async fn extract_blocking(
    state: Arc<AppState>,
    data: Vec<u8>,
) -> Result<ExtractedText, BackendError> {
    tokio::task::spawn_blocking(move || state.backend.extract_text(&data))
        .await
        .map_err(|e| BackendError::Panicked(e.to_string()))?
}
