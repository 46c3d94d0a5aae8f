//! Ingestion — turns uploaded documents into `InputSource` entries.
//!
//! PDF text extraction happens locally; images go through the LLM vision path.
//! Plain text and docx payloads are taken as UTF-8 text.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::errors::AppError;
use crate::llm_client::prompts::IMAGE_TEXT_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::profile::SourceKind;

pub mod handlers;

/// Reads text out of an uploaded image. LLM-backed in production, mocked in
/// handler tests.
#[async_trait]
pub trait ImageTextExtractor: Send + Sync {
    async fn extract_text(&self, mime_type: &str, data: &[u8]) -> Result<String, AppError>;
}

pub struct GeminiImageTextExtractor(pub LlmClient);

#[async_trait]
impl ImageTextExtractor for GeminiImageTextExtractor {
    async fn extract_text(&self, mime_type: &str, data: &[u8]) -> Result<String, AppError> {
        let encoded = BASE64.encode(data);
        self.0
            .call_vision(mime_type, &encoded, IMAGE_TEXT_INSTRUCTION)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to read text from image: {e}")))
    }
}

/// Decides the extraction path from the declared content type, falling back to
/// the filename extension.
pub fn classify_source(filename: Option<&str>, content_type: Option<&str>) -> SourceKind {
    if let Some(ct) = content_type {
        if ct == "application/pdf" {
            return SourceKind::Pdf;
        }
        if ct.starts_with("image/") {
            return SourceKind::Image;
        }
        if ct.contains("officedocument.wordprocessingml") {
            return SourceKind::Docx;
        }
    }
    let extension = filename
        .and_then(|f| f.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => SourceKind::Pdf,
        Some("png" | "jpg" | "jpeg" | "webp") => SourceKind::Image,
        Some("docx") => SourceKind::Docx,
        _ => SourceKind::Text,
    }
}

/// Extracts raw text from an uploaded document according to its kind.
pub async fn extract_document_text(
    kind: SourceKind,
    mime_type: &str,
    data: &[u8],
    vision: &dyn ImageTextExtractor,
) -> Result<String, AppError> {
    match kind {
        SourceKind::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("PDF extraction failed: {e}"))),
        SourceKind::Image => vision.extract_text(mime_type, data).await,
        // Docx arrives pre-converted from clients today; treat it as text.
        SourceKind::Text | SourceKind::Docx => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}
