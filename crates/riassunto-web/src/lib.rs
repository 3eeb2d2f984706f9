//! Web front-end: upload a PDF, get its text and a generated summary back,
//! download the summary as a text file.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;
pub mod template;
pub mod upload;

pub use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index::index).post(handlers::index::summarize),
        )
        .route("/download", post(handlers::download::download))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
