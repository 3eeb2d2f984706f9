use mupdf::{Document, TextPageFlags};

use riassunto_core::{BackendError, PdfBackend};

/// The PDF header may be preceded by junk; readers look for it in the first KiB.
const HEADER_SEARCH_LEN: usize = 1024;

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the core and its tests do not transitively
/// depend on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

fn has_pdf_header(data: &[u8]) -> bool {
    let window = &data[..data.len().min(HEADER_SEARCH_LEN)];
    window.windows(5).any(|w| w == b"%PDF-")
}

impl PdfBackend for MupdfBackend {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<Option<String>>, BackendError> {
        if !has_pdf_header(data) {
            return Err(BackendError::OpenError(
                "data doesn't appear to be a PDF".into(),
            ));
        }

        let document = Document::from_bytes(data, "application/pdf")
            .map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages = Vec::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            // Block/line iteration keeps reading order and gives one line per row.
            let mut lines = Vec::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    lines.push(line_text);
                }
            }

            if lines.is_empty() {
                pages.push(None);
            } else {
                pages.push(Some(lines.join("\n")));
            }
        }

        tracing::debug!(pages = pages.len(), bytes = data.len(), "extracted PDF pages");
        Ok(pages)
    }
}
