use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::{
    AudioSource, MediaExtractor, MediaExtractorError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{ModelSize, Transcript};

/// A completed transcription together with its wall-clock cost.
#[derive(Debug, Clone)]
pub struct TranscriptionReport {
    pub transcript: Transcript,
    pub model: ModelSize,
    pub elapsed: Duration,
}

pub struct TranscriptionService<E, M>
where
    E: TranscriptionEngine,
    M: MediaExtractor,
{
    engine: Arc<E>,
    extractor: Arc<M>,
    sample_audio_path: PathBuf,
}

impl<E, M> TranscriptionService<E, M>
where
    E: TranscriptionEngine,
    M: MediaExtractor,
{
    pub fn new(engine: Arc<E>, extractor: Arc<M>, sample_audio_path: PathBuf) -> Self {
        Self {
            engine,
            extractor,
            sample_audio_path,
        }
    }

    pub async fn transcribe_audio(
        &self,
        data: Vec<u8>,
        model: ModelSize,
    ) -> Result<TranscriptionReport, TranscriptionServiceError> {
        let started = Instant::now();
        let transcript = self.engine.transcribe(AudioSource::Memory(data), model).await?;
        Ok(TranscriptionReport {
            transcript,
            model,
            elapsed: started.elapsed(),
        })
    }

    /// Transcribe the configured sample file. A missing sample is a resource
    /// problem on this operation only, not a service fault.
    pub async fn transcribe_sample(
        &self,
        model: ModelSize,
    ) -> Result<TranscriptionReport, TranscriptionServiceError> {
        if !self.sample_audio_path.exists() {
            tracing::warn!(path = %self.sample_audio_path.display(), "Sample audio not found");
            return Err(TranscriptionServiceError::SampleMissing(
                self.sample_audio_path.clone(),
            ));
        }

        let started = Instant::now();
        let transcript = self
            .engine
            .transcribe(AudioSource::Path(self.sample_audio_path.clone()), model)
            .await?;
        Ok(TranscriptionReport {
            transcript,
            model,
            elapsed: started.elapsed(),
        })
    }

    /// Video pipeline: stage the upload, extract its audio track, transcribe.
    ///
    /// Both scratch files are `TempPath`s, so they are removed on every exit
    /// path of this function, including extraction and transcription errors.
    pub async fn transcribe_video(
        &self,
        data: Vec<u8>,
        extension: &str,
        model: ModelSize,
    ) -> Result<TranscriptionReport, TranscriptionServiceError> {
        let started = Instant::now();

        let mut video_file = tempfile::Builder::new()
            .prefix("voxsuite-video-")
            .suffix(&format!(".{}", extension.trim_start_matches('.')))
            .tempfile()
            .map_err(|e| TranscriptionServiceError::TempFile(e.to_string()))?;
        video_file
            .write_all(&data)
            .map_err(|e| TranscriptionServiceError::TempFile(e.to_string()))?;
        let video_path = video_file.into_temp_path();

        let audio_file = tempfile::Builder::new()
            .prefix("voxsuite-audio-")
            .suffix(".mp3")
            .tempfile()
            .map_err(|e| TranscriptionServiceError::TempFile(e.to_string()))?;
        let audio_path = audio_file.into_temp_path();

        self.extractor.extract_audio(&video_path, &audio_path).await?;

        tracing::debug!(
            video = %video_path.display(),
            audio = %audio_path.display(),
            "Audio track extracted from video"
        );

        let transcript = self
            .engine
            .transcribe(AudioSource::Path(audio_path.to_path_buf()), model)
            .await?;

        Ok(TranscriptionReport {
            transcript,
            model,
            elapsed: started.elapsed(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("sample audio not found at {}", .0.display())]
    SampleMissing(PathBuf),
    #[error("temp file: {0}")]
    TempFile(String),
    #[error("audio extraction: {0}")]
    Extraction(#[from] MediaExtractorError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}
