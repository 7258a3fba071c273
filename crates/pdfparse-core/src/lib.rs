pub mod backend;
pub mod config_file;
pub mod extract;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use config_file::ServerConfig;
pub use extract::ExtractedText;
