pub mod backend;
pub mod config;
pub mod config_file;
pub mod extract;
pub mod summarizer;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use config::{Config, ServerConfig, SummarizerConfig};
pub use extract::{ExtractedText, extract_document, extract_text, join_pages};
pub use summarizer::{DEFAULT_LENGTH, SummaryClient, SummaryOutcome, build_prompt};
