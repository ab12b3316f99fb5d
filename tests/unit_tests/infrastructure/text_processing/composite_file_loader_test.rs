use std::sync::Arc;

use voxsuite::application::ports::{FileLoader, FileLoaderError};
use voxsuite::domain::{ContentType, Document};
use voxsuite::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

#[tokio::test]
async fn given_text_document_when_loading_then_delegates_to_text_adapter() {
    let loader = CompositeFileLoader::with_builtin_adapters();

    let text_bytes = b"Hello plain text";
    let document = Document::new(
        "readme.txt".to_string(),
        ContentType::Text,
        text_bytes.len() as u64,
    );

    let result = loader.extract_text(text_bytes, &document).await;

    assert_eq!(result.unwrap(), "Hello plain text");
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);

    let data = b"fake audio";
    let document = Document::new(
        "lecture.mp3".to_string(),
        ContentType::Audio,
        data.len() as u64,
    );

    let result = loader.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn given_builtin_adapters_then_all_three_text_kinds_registered() {
    let loader = CompositeFileLoader::with_builtin_adapters();

    for (content_type, filename) in [
        (ContentType::Text, "a.txt"),
        (ContentType::Docx, "a.docx"),
        (ContentType::Pdf, "a.pdf"),
    ] {
        let document = Document::new(filename.to_string(), content_type, 0);
        let result = loader.extract_text(b"", &document).await;
        // Adapters may fail on empty input, but never because the kind is
        // unregistered.
        assert!(
            !matches!(result, Err(FileLoaderError::UnsupportedContentType(_))),
            "{:?} not registered",
            content_type
        );
    }
}
