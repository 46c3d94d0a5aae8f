use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::{classify_source, extract_document_text};
use crate::models::profile::{InputSource, SourceKind};
use crate::state::AppState;

/// POST /api/v1/ingest/document
///
/// Accepts one multipart `file` field and returns the extracted `InputSource`,
/// ready to be appended to the caller's profile.
pub async fn handle_ingest_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<InputSource>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let data: bytes::Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let kind = classify_source(filename.as_deref(), content_type.as_deref());
        let mime_type = content_type.unwrap_or_else(|| default_mime(kind).to_string());

        let content =
            extract_document_text(kind, &mime_type, &data, state.vision.as_ref()).await?;

        let label = filename.clone().unwrap_or_else(|| "pasted text".to_string());
        info!(
            "Ingested document '{}' ({} bytes, {:?})",
            label,
            data.len(),
            kind
        );

        return Ok(Json(InputSource {
            kind,
            label,
            filename,
            content,
        }));
    }

    Err(AppError::Validation(
        "Multipart field 'file' is required".to_string(),
    ))
}

fn default_mime(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Pdf => "application/pdf",
        SourceKind::Image => "image/jpeg",
        SourceKind::Docx => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        SourceKind::Text => "text/plain",
    }
}
