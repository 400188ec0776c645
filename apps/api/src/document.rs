//! Resume uploads: multipart form reading and PDF text extraction.
//!
//! Extraction runs on the blocking pool. A document whose text is blank after
//! trimming is "no usable text", reported as `Ok(None)` rather than an error.

use std::collections::HashMap;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

/// Multipart part carrying the PDF.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("extraction task failed: {0}")]
    Task(tokio::task::JoinError),
}

/// Extracts the text of a PDF. `None` when the document holds no text.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<Option<String>, DocumentError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed inputs
            if e.is_panic() {
                DocumentError::Pdf("extractor aborted on malformed input".to_string())
            } else {
                DocumentError::Task(e)
            }
        })?
        .map_err(|e| DocumentError::Pdf(e.to_string()))?;

    let text = non_blank(text);
    debug!(
        bytes = size,
        chars = text.as_ref().map_or(0, |t| t.len()),
        "PDF text extracted"
    );
    Ok(text)
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart form
// ────────────────────────────────────────────────────────────────────────────

/// A resume upload: the PDF part plus any text fields sent alongside it.
#[derive(Debug, Default)]
pub struct ResumeForm {
    resume: Option<Bytes>,
    fields: HashMap<String, String>,
}

impl ResumeForm {
    /// Drains the multipart stream. Unnamed parts are ignored.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if name == RESUME_FIELD {
                form.resume = Some(field.bytes().await.map_err(multipart_error)?);
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// A text field, trimmed. Missing or blank → 400.
    pub fn require_field(&self, name: &str) -> Result<String, AppError> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation(format!("{name} cannot be empty")))
    }

    /// Extracts the uploaded resume's text.
    ///
    /// Missing or empty upload → 400; unreadable PDF or no text → 422.
    pub async fn resume_text(&mut self) -> Result<String, AppError> {
        let bytes = self
            .resume
            .take()
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| AppError::Validation(format!("{RESUME_FIELD} file is required")))?;

        extract_pdf_text(bytes).await?.ok_or_else(|| {
            AppError::UnprocessableEntity("No text could be extracted from the resume".to_string())
        })
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
