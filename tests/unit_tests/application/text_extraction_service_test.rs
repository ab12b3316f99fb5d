use std::sync::Arc;

use voxsuite::application::services::TextExtractionService;
use voxsuite::infrastructure::text_processing::CompositeFileLoader;

fn service() -> TextExtractionService<CompositeFileLoader> {
    TextExtractionService::new(Arc::new(CompositeFileLoader::with_builtin_adapters()))
}

#[tokio::test]
async fn given_txt_upload_when_extracting_then_plain_copy() {
    let svc = service();

    let extracted = svc
        .extract(b"Hello plain text", "notes.txt")
        .await
        .unwrap();

    assert_eq!(extracted.text, "Hello plain text");
    assert!(extracted.warning.is_none());
}

#[tokio::test]
async fn given_unknown_extension_when_extracting_then_empty_text_with_warning() {
    let svc = service();

    let extracted = svc.extract(b"binary blob", "report.xlsx").await.unwrap();

    assert_eq!(extracted.text, "");
    assert!(extracted.warning.is_some());
}

#[tokio::test]
async fn given_audio_upload_when_extracting_text_then_empty_text_with_warning() {
    let svc = service();

    let extracted = svc.extract(b"id3 data", "lecture.mp3").await.unwrap();

    assert_eq!(extracted.text, "");
    assert!(extracted.warning.is_some());
}

#[tokio::test]
async fn given_empty_txt_upload_when_extracting_then_warning_set() {
    let svc = service();

    let extracted = svc.extract(b"", "empty.txt").await.unwrap();

    assert_eq!(extracted.text, "");
    assert!(extracted.warning.is_some());
}
