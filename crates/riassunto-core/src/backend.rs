use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the per-page extraction step; joining pages into the
/// final text lives in [`crate::extract::extract_text`].
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page of an in-memory PDF, in document order.
    ///
    /// A `None` entry marks a page without a text layer (e.g. a scanned image).
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<Option<String>>, BackendError>;
}
