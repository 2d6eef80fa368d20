//! Text extraction: turns a persisted document into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is
//! [`PdfTextExtractor`]. Tests swap in an extractor that reads plain text.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("extractor aborted: {0}")]
    Aborted(String),
}

/// Extracts the text of the document stored at `path`.
///
/// Implementations return the trimmed text; an empty string means the
/// document had no extractable text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// File extension (lower-case, without the dot) this extractor accepts.
    fn accepted_extension(&self) -> &'static str;

    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// PDF text extraction via `pdf-extract`, run on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    fn accepted_extension(&self) -> &'static str {
        "pdf"
    }

    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(path).await?;
        debug!(
            "Extracting text from {} ({} bytes)",
            path.display(),
            bytes.len()
        );

        // pdf-extract is synchronous and can panic on malformed input; the
        // JoinError turns a panic into a per-document failure.
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
        .map_err(ExtractionError::Pdf)?;

        Ok(text.trim().to_string())
    }
}

/// Whether `filename` carries `extension` (case-insensitive). A name without
/// a dot never matches.
pub fn has_extension(filename: &str, extension: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
