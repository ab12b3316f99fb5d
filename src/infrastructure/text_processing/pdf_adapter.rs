use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts PDF text page by page, skipping pages whose extraction yields
/// nothing, the surviving pages concatenated in order.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();
        for page_number in doc.get_pages().keys() {
            let text = doc.extract_text(&[*page_number]).unwrap_or_default();
            if !text.trim().is_empty() {
                pages.push(text);
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_str().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let filename = document.filename.clone();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::debug!(
            filename = %filename,
            page_count = pages.len(),
            "PDF text extraction complete"
        );

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(filename));
        }

        Ok(pages.join("\n"))
    }
}
