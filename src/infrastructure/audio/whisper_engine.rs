use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{AudioSource, TranscriptionEngine, TranscriptionError};
use crate::domain::{ModelSize, Transcript};

#[cfg(feature = "whisper-runtime")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "whisper-runtime")]
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

#[cfg(feature = "whisper-runtime")]
use crate::domain::TranscriptSegment;

#[cfg(feature = "whisper-runtime")]
use super::audio_decoder::decode_audio_to_pcm;

/// Local Whisper engine over whisper.cpp. Model files are resolved as
/// `<models_dir>/ggml-<size>.bin`; the most recently loaded context is
/// cached for the lifetime of the process, so repeat requests for the same
/// size skip the load.
pub struct WhisperEngine {
    models_dir: PathBuf,
    #[cfg(feature = "whisper-runtime")]
    cache: Mutex<Option<(ModelSize, Arc<WhisperContext>)>>,
}

impl WhisperEngine {
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
            #[cfg(feature = "whisper-runtime")]
            cache: Mutex::new(None),
        }
    }

    pub fn model_path(&self, model: ModelSize) -> PathBuf {
        self.models_dir.join(format!("ggml-{}.bin", model.as_str()))
    }
}

#[cfg(feature = "whisper-runtime")]
impl WhisperEngine {
    fn load_context(&self, model: ModelSize) -> Result<Arc<WhisperContext>, TranscriptionError> {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some((cached_size, context)) = cache.as_ref() {
            if *cached_size == model {
                return Ok(Arc::clone(context));
            }
        }

        let path = self.model_path(model);
        if !path.exists() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "whisper model not found at {}",
                path.display()
            )));
        }

        tracing::info!(model = %model, path = %path.display(), "Loading Whisper model");

        let path_str = path.to_str().ok_or_else(|| {
            TranscriptionError::ModelLoadFailed(format!("non-UTF-8 model path: {}", path.display()))
        })?;
        let context =
            WhisperContext::new_with_params(path_str, WhisperContextParameters::default())
                .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        let context = Arc::new(context);
        *cache = Some((model, Arc::clone(&context)));
        Ok(context)
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperEngine {
    async fn transcribe(
        &self,
        audio: AudioSource,
        model: ModelSize,
    ) -> Result<Transcript, TranscriptionError> {
        #[cfg(feature = "whisper-runtime")]
        {
            let bytes = match audio {
                AudioSource::Memory(bytes) => bytes,
                AudioSource::Path(path) => tokio::fs::read(&path).await.map_err(|e| {
                    TranscriptionError::AudioUnreadable(format!("{}: {}", path.display(), e))
                })?,
            };

            let context = self.load_context(model)?;

            let transcript =
                tokio::task::spawn_blocking(move || run_inference(&context, &bytes))
                    .await
                    .map_err(|e| {
                        TranscriptionError::TranscriptionFailed(format!("task join: {}", e))
                    })??;

            tracing::info!(
                model = %model,
                segments = transcript.segments.len(),
                chars = transcript.full_text.len(),
                "Transcription completed"
            );

            Ok(transcript)
        }

        #[cfg(not(feature = "whisper-runtime"))]
        {
            let _ = (audio, model, &self.models_dir);
            Err(TranscriptionError::ModelLoadFailed(
                "built without the whisper-runtime feature".to_string(),
            ))
        }
    }
}

#[cfg(feature = "whisper-runtime")]
fn run_inference(
    context: &WhisperContext,
    audio_bytes: &[u8],
) -> Result<Transcript, TranscriptionError> {
    let samples = decode_audio_to_pcm(audio_bytes)?;

    let mut state = context
        .create_state()
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("state: {}", e)))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_language(Some("auto"));
    params.set_translate(false);
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);
    params.set_n_threads(available_threads());

    state
        .full(params, &samples)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference: {}", e)))?;

    let mut full_text = String::new();
    let mut segments = Vec::new();

    for idx in 0..state.full_n_segments() {
        let Some(segment) = state.get_segment(idx) else {
            continue;
        };

        let text = segment
            .to_str_lossy()
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        if text.trim().is_empty() {
            continue;
        }

        // Timestamps are reported in centiseconds.
        let start_secs = segment.start_timestamp() as f64 / 100.0;
        let end_secs = segment.end_timestamp() as f64 / 100.0;

        full_text.push_str(&text);
        segments.push(TranscriptSegment {
            start_secs,
            end_secs,
            text: text.trim().to_string(),
        });
    }

    Ok(Transcript::new(full_text.trim().to_string(), segments))
}

#[cfg(feature = "whisper-runtime")]
fn available_threads() -> i32 {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(4) as i32
}
