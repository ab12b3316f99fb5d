use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Extraction outcome. An unrecognized extension yields empty text plus a
/// warning rather than a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub warning: Option<String>,
}

pub struct TextExtractionService<F>
where
    F: FileLoader,
{
    loader: Arc<F>,
}

impl<F> TextExtractionService<F>
where
    F: FileLoader,
{
    pub fn new(loader: Arc<F>) -> Self {
        Self { loader }
    }

    pub async fn extract(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<ExtractedText, FileLoaderError> {
        let content_type = ContentType::from_filename(filename);
        match content_type {
            Some(ct @ (ContentType::Text | ContentType::Docx | ContentType::Pdf)) => {
                let document = Document::new(filename.to_string(), ct, data.len() as u64);
                let text = self.loader.extract_text(data, &document).await?;
                let warning = text
                    .trim()
                    .is_empty()
                    .then(|| format!("No text could be extracted from {}", filename));
                Ok(ExtractedText { text, warning })
            }
            _ => {
                tracing::warn!(filename, "Unsupported file type for text extraction");
                Ok(ExtractedText {
                    text: String::new(),
                    warning: Some(format!(
                        "Unsupported file type: {}. Expected .txt, .docx, or .pdf",
                        filename
                    )),
                })
            }
        }
    }
}
