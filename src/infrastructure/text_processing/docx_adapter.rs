use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Extracts DOCX text paragraph by paragraph, joined with newlines, the run
/// texts of each paragraph concatenated in order.
pub struct DocxAdapter;

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[async_trait]
impl FileLoader for DocxAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_str().to_string(),
            ));
        }

        let docx = docx_rs::read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
                _ => None,
            })
            .collect();

        tracing::debug!(
            filename = %document.filename,
            paragraphs = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join("\n"))
    }
}
