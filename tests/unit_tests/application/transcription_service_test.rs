use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use voxsuite::application::ports::{
    AudioSource, MediaExtractor, MediaExtractorError, TranscriptionEngine, TranscriptionError,
};
use voxsuite::application::services::{TranscriptionService, TranscriptionServiceError};
use voxsuite::domain::{ModelSize, Transcript, TranscriptSegment};

struct StubEngine {
    calls: AtomicUsize,
    fail: bool,
}

impl StubEngine {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionEngine for StubEngine {
    async fn transcribe(
        &self,
        _audio: AudioSource,
        _model: ModelSize,
    ) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TranscriptionError::TranscriptionFailed(
                "stub failure".to_string(),
            ));
        }
        Ok(Transcript::new(
            "and so my fellow Americans".to_string(),
            vec![TranscriptSegment {
                start_secs: 0.0,
                end_secs: 2.5,
                text: "and so my fellow Americans".to_string(),
            }],
        ))
    }
}

/// Records the paths it was handed so the test can check them afterwards.
struct RecordingExtractor {
    seen: Mutex<Option<(PathBuf, PathBuf)>>,
    exit_failure: Option<String>,
}

impl RecordingExtractor {
    fn succeeding() -> Self {
        Self {
            seen: Mutex::new(None),
            exit_failure: None,
        }
    }

    fn failing(stderr: &str) -> Self {
        Self {
            seen: Mutex::new(None),
            exit_failure: Some(stderr.to_string()),
        }
    }

    fn recorded_paths(&self) -> (PathBuf, PathBuf) {
        self.seen
            .lock()
            .unwrap()
            .clone()
            .expect("extractor was never invoked")
    }
}

#[async_trait]
impl MediaExtractor for RecordingExtractor {
    async fn extract_audio(
        &self,
        video_path: &Path,
        audio_path: &Path,
    ) -> Result<(), MediaExtractorError> {
        *self.seen.lock().unwrap() = Some((video_path.to_path_buf(), audio_path.to_path_buf()));
        match &self.exit_failure {
            Some(stderr) => Err(MediaExtractorError::ExtractionFailed(stderr.clone())),
            None => Ok(()),
        }
    }
}

fn service(
    engine: Arc<StubEngine>,
    extractor: Arc<RecordingExtractor>,
) -> TranscriptionService<StubEngine, RecordingExtractor> {
    TranscriptionService::new(engine, extractor, PathBuf::from("/nonexistent/sample.mp3"))
}

#[tokio::test]
async fn given_audio_bytes_when_transcribing_then_report_carries_transcript() {
    let engine = Arc::new(StubEngine::new(false));
    let extractor = Arc::new(RecordingExtractor::succeeding());
    let svc = service(Arc::clone(&engine), extractor);

    let report = svc
        .transcribe_audio(vec![1, 2, 3], ModelSize::Base)
        .await
        .unwrap();

    assert_eq!(report.transcript.full_text, "and so my fellow Americans");
    assert_eq!(report.model, ModelSize::Base);
    assert_eq!(engine.call_count(), 1);
}

#[tokio::test]
async fn given_missing_sample_when_transcribing_then_sample_missing_without_engine_call() {
    let engine = Arc::new(StubEngine::new(false));
    let extractor = Arc::new(RecordingExtractor::succeeding());
    let svc = service(Arc::clone(&engine), extractor);

    let result = svc.transcribe_sample(ModelSize::Tiny).await;

    assert!(matches!(
        result,
        Err(TranscriptionServiceError::SampleMissing(_))
    ));
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn given_video_when_pipeline_succeeds_then_both_temp_files_removed() {
    let engine = Arc::new(StubEngine::new(false));
    let extractor = Arc::new(RecordingExtractor::succeeding());
    let svc = service(Arc::clone(&engine), Arc::clone(&extractor));

    let report = svc
        .transcribe_video(b"fake video bytes".to_vec(), "mp4", ModelSize::Base)
        .await
        .unwrap();

    assert!(!report.transcript.segments.is_empty());
    assert_eq!(engine.call_count(), 1);

    let (video_path, audio_path) = extractor.recorded_paths();
    assert!(!video_path.exists(), "video temp file left behind");
    assert!(!audio_path.exists(), "audio temp file left behind");
}

#[tokio::test]
async fn given_extraction_failure_when_transcribing_video_then_engine_never_invoked_and_temps_removed()
{
    let engine = Arc::new(StubEngine::new(false));
    let extractor = Arc::new(RecordingExtractor::failing("ffmpeg exited with code 1"));
    let svc = service(Arc::clone(&engine), Arc::clone(&extractor));

    let result = svc
        .transcribe_video(b"fake video bytes".to_vec(), "mp4", ModelSize::Base)
        .await;

    match result {
        Err(TranscriptionServiceError::Extraction(MediaExtractorError::ExtractionFailed(
            stderr,
        ))) => {
            assert_eq!(stderr, "ffmpeg exited with code 1");
        }
        other => panic!("expected extraction failure, got {:?}", other.map(|_| ())),
    }

    assert_eq!(engine.call_count(), 0);

    let (video_path, audio_path) = extractor.recorded_paths();
    assert!(!video_path.exists(), "video temp file left behind");
    assert!(!audio_path.exists(), "audio temp file left behind");
}

#[tokio::test]
async fn given_transcription_failure_when_transcribing_video_then_temps_removed() {
    let engine = Arc::new(StubEngine::new(true));
    let extractor = Arc::new(RecordingExtractor::succeeding());
    let svc = service(Arc::clone(&engine), Arc::clone(&extractor));

    let result = svc
        .transcribe_video(b"fake video bytes".to_vec(), "mkv", ModelSize::Small)
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionServiceError::Transcription(_))
    ));

    let (video_path, audio_path) = extractor.recorded_paths();
    assert!(!video_path.exists(), "video temp file left behind");
    assert!(!audio_path.exists(), "audio temp file left behind");
}

#[tokio::test]
async fn given_video_upload_when_staged_then_extractor_sees_declared_extension() {
    let engine = Arc::new(StubEngine::new(false));
    let extractor = Arc::new(RecordingExtractor::succeeding());
    let svc = service(engine, Arc::clone(&extractor));

    svc.transcribe_video(b"bytes".to_vec(), "wmv", ModelSize::Base)
        .await
        .unwrap();

    let (video_path, audio_path) = extractor.recorded_paths();
    assert_eq!(
        video_path.extension().and_then(|e| e.to_str()),
        Some("wmv")
    );
    assert_eq!(
        audio_path.extension().and_then(|e| e.to_str()),
        Some("mp3")
    );
}
