use serde::Serialize;

/// Body of a successful extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub text: String,
}

impl ParseResponse {
    pub fn new(text: String) -> Self {
        Self {
            success: true,
            text,
        }
    }
}

/// Body of every rejected or failed request. Never carries a `success` key.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
