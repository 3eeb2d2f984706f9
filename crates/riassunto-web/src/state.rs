use std::sync::Arc;

use riassunto_core::{PdfBackend, SummaryClient};

/// Shared application state accessible from all handlers.
///
/// Built once at startup and read-only afterwards.
pub struct AppState {
    pub summarizer: SummaryClient,
    pub backend: Arc<dyn PdfBackend>,
}

impl AppState {
    pub fn new(summarizer: SummaryClient, backend: Arc<dyn PdfBackend>) -> Self {
        Self {
            summarizer,
            backend,
        }
    }
}
