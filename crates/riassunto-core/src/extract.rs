//! Whole-document text extraction on top of a [`PdfBackend`].

use crate::backend::{BackendError, PdfBackend};

/// Text of a whole document together with the number of pages it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

/// Extract the full text of a PDF: every page's text followed by a newline,
/// in page order.
///
/// Pages without a text layer contribute an empty segment rather than an
/// error. A document with no pages is rejected as invalid.
pub fn extract_text(backend: &dyn PdfBackend, data: &[u8]) -> Result<String, BackendError> {
    extract_document(backend, data).map(|doc| doc.text)
}

/// Same as [`extract_text`], but also reports how many pages were read.
///
/// A page may span several lines, so the page count cannot be recovered
/// from the joined text.
pub fn extract_document(
    backend: &dyn PdfBackend,
    data: &[u8],
) -> Result<ExtractedText, BackendError> {
    let pages = backend.extract_pages(data)?;
    if pages.is_empty() {
        return Err(BackendError::InvalidDocument("document has no pages".into()));
    }

    let page_count = pages.len();
    let empty = pages.iter().filter(|p| p.is_none()).count();
    if empty > 0 {
        tracing::debug!(pages = page_count, empty, "pages without a text layer");
    }

    Ok(ExtractedText {
        text: join_pages(pages),
        page_count,
    })
}

/// Concatenate page texts, appending `\n` after each one. `None` counts as "".
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut text = String::new();
    for page in pages {
        if let Some(page_text) = page {
            text.push_str(&page_text);
        }
        text.push('\n');
    }
    text
}
