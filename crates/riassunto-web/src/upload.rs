use axum::body::Bytes;
use axum::extract::Multipart;

use riassunto_core::DEFAULT_LENGTH;

use crate::error::AppError;

/// An uploaded file with its data and metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Parsed form fields from the multipart upload.
pub struct FormFields {
    /// `None` when the form carried no `pdf_file` part, or an empty one
    /// (browsers send an empty part when no file was chosen).
    /// Treating an empty part as missing is intentional: it renders the blank
    /// page instead of failing extraction on zero bytes.
    pub file: Option<UploadedFile>,
    /// Free-form length qualifier, passed through to the prompt unchanged.
    pub length: String,
}

/// Parse a multipart form upload into structured form fields.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<FormFields, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut length: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(format!("Failed to read form field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "pdf_file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(format!("Failed to read file data: {}", e)))?;

                if data.is_empty() {
                    tracing::debug!(filename = %filename, "ignoring empty file part");
                    continue;
                }
                file = Some(UploadedFile { filename, data });
            }
            "lunghezza" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| AppError::Multipart(format!("Failed to read lunghezza: {}", e)))?;
                length = Some(val);
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(FormFields {
        file,
        length: length.unwrap_or_else(|| DEFAULT_LENGTH.to_string()),
    })
}
