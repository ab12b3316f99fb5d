use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Dispatches text extraction to the adapter registered for the document's
/// content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// The default registration: txt, docx, and pdf adapters.
    pub fn with_builtin_adapters() -> Self {
        Self::new(vec![
            (
                ContentType::Text,
                Arc::new(super::PlainTextAdapter) as Arc<dyn FileLoader>,
            ),
            (ContentType::Docx, Arc::new(super::DocxAdapter)),
            (ContentType::Pdf, Arc::new(super::PdfAdapter::new())),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_str().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
