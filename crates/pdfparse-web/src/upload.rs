use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;

use crate::error::ParseError;

/// Name of the multipart part carrying the document.
pub const FILE_FIELD: &str = "file";

/// An uploaded file with its data and metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pull the `file` part out of a multipart upload, validating its name
/// before any of its bytes are read.
///
/// A body that is not multipart, or that breaks while we are still looking
/// for the part, counts as having no file part. A failure while reading the
/// part's own bytes, or the body limit being hit anywhere, is treated as an
/// unreadable upload.
pub async fn read_pdf_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile, ParseError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "request body is not a multipart form");
            return Err(ParseError::NoFilePart);
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ParseError::NoFilePart),
            Err(e) => return Err(scan_error(e)),
        };

        // Plain form values named `file` (no filename attribute) are not uploads.
        let filename = if field.name() == Some(FILE_FIELD) {
            field.file_name().map(str::to_owned)
        } else {
            None
        };
        let Some(filename) = filename else {
            if let Err(e) = field.bytes().await {
                return Err(scan_error(e));
            }
            continue;
        };

        validate_filename(&filename)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ParseError::Unreadable(e.to_string()))?
            .to_vec();

        return Ok(UploadedFile { filename, data });
    }
}

/// Classify a failure hit before the `file` part was found.
fn scan_error(e: MultipartError) -> ParseError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::debug!(error = %e, "upload exceeds body limit");
        ParseError::Unreadable(e.to_string())
    } else {
        tracing::debug!(error = %e, "malformed multipart body");
        ParseError::NoFilePart
    }
}

/// Check the client-supplied filename. The `.pdf` suffix is matched
/// literally: no case folding, no content sniffing.
pub fn validate_filename(filename: &str) -> Result<(), ParseError> {
    if filename.is_empty() {
        return Err(ParseError::NoSelectedFile);
    }
    if !filename.ends_with(".pdf") {
        return Err(ParseError::InvalidFileType);
    }
    Ok(())
}
