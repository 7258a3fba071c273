use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use pdfparse_core::BackendError;

use crate::models::ErrorResponse;

/// Everything that can stop a `/api/parse-pdf` request short of a 200.
///
/// The display strings are the exact `error` values sent to the client.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No file part in the request")]
    NoFilePart,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("Invalid file type, please upload a PDF")]
    InvalidFileType,
    /// The upload body broke off while the `file` part was being read.
    #[error("Failed to parse PDF: {0}")]
    Unreadable(String),
    #[error("Failed to parse PDF: {0}")]
    Backend(#[from] BackendError),
}

impl ParseError {
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::NoFilePart | ParseError::NoSelectedFile | ParseError::InvalidFileType => {
                StatusCode::BAD_REQUEST
            }
            ParseError::Unreadable(_) | ParseError::Backend(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ParseError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
