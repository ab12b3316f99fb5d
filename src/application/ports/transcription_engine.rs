use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{ModelSize, Transcript};

/// Audio handed to the engine, either on disk or in memory.
#[derive(Debug, Clone)]
pub enum AudioSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: AudioSource,
        model: ModelSize,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio unreadable: {0}")]
    AudioUnreadable(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
}
