use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

pub const DOWNLOAD_FILENAME: &str = "riassunto.txt";
pub const NO_SUMMARY_MESSAGE: &str = "Nessun riassunto disponibile.";

#[derive(Debug, Default, Deserialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub riassunto: String,
}

/// `POST /download`: send back a previously generated summary as a text file.
///
/// The summary is taken verbatim from the form; nothing is recomputed. An
/// empty or missing summary gets a plain message instead of an attachment.
pub async fn download(form: Result<Form<DownloadForm>, FormRejection>) -> Response {
    let summary = match form {
        Ok(Form(form)) => form.riassunto,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "download request without a readable form");
            String::new()
        }
    };

    if summary.is_empty() {
        return NO_SUMMARY_MESSAGE.into_response();
    }

    tracing::debug!(bytes = summary.len(), "sending summary download");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        summary,
    )
        .into_response()
}
