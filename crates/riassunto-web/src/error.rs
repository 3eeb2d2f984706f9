//! Error type for the web handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use riassunto_core::BackendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid upload: {0}")]
    Multipart(String),

    #[error("text extraction failed: {0}")]
    Extraction(#[from] BackendError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Multipart(msg) => {
                tracing::warn!("Multipart error: {}", msg);
                StatusCode::BAD_REQUEST
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {}", e);
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
                    .into_response();
            }
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_maps_to_unprocessable() {
        let err = AppError::from(BackendError::InvalidDocument("document has no pages".into()));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn multipart_maps_to_bad_request() {
        let err = AppError::Multipart("truncated body".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_hides_details() {
        let err = AppError::Internal("join error: panicked".into());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
