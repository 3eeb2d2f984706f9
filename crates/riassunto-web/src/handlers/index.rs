use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::Html;

use riassunto_core::{PdfBackend, extract_text};

use crate::error::AppError;
use crate::state::AppState;
use crate::template;
use crate::upload;

/// `GET /`: the empty upload form.
pub async fn index() -> Html<String> {
    template::render_index("", "")
}

/// `POST /`: extract the uploaded PDF, summarize it, render both.
///
/// Without a `pdf_file` part the empty page is rendered and nothing is sent
/// to the summarization endpoint.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let fields = upload::parse_multipart(multipart).await?;

    let Some(file) = fields.file else {
        tracing::debug!("no PDF in submission, rendering empty page");
        return Ok(template::render_index("", ""));
    };

    tracing::info!(
        filename = %file.filename,
        bytes = file.data.len(),
        length = %fields.length,
        "summarizing upload"
    );

    let text = extract_pdf_blocking(state.backend.clone(), file.data)
        .await
        .inspect_err(|e| tracing::warn!(filename = %file.filename, error = %e, "extraction failed"))?;

    let outcome = state.summarizer.summarize(&text, &fields.length).await;
    tracing::info!(
        filename = %file.filename,
        chars = text.len(),
        outcome = outcome.kind(),
        "upload processed"
    );

    Ok(template::render_index(&text, &outcome.display_text()))
}

/// Run MuPDF extraction on the blocking pool.
async fn extract_pdf_blocking(
    backend: Arc<dyn PdfBackend>,
    data: Bytes,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(backend.as_ref(), &data))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(AppError::Extraction)
}
